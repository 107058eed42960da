use thiserror::Error;

use crate::types::{CameraId, CheckerboardId};

/// Errors raised while building an initial rig estimate.
#[derive(Debug, Error)]
pub enum ExtrinsicInitError {
    /// Some cameras or checkerboards are not connected to the root through
    /// mutual observations.
    #[error(
        "insufficient coverage from root camera {root}: missing cameras {missing_cameras:?}, missing checkerboards {missing_checkerboards:?}"
    )]
    InsufficientCoverage {
        root: CameraId,
        missing_cameras: Vec<CameraId>,
        missing_checkerboards: Vec<CheckerboardId>,
    },
    /// The requested root camera appears in no sample.
    #[error("root camera {0} does not appear in any sample")]
    UnknownRootCamera(CameraId),
    /// No sample contains a single detection.
    #[error("samples contain no checkerboard detection")]
    NoDetections,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtrinsicInitError>;
