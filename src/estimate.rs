use std::collections::BTreeSet;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ExtrinsicInitError, Result};
use crate::graph::MutualObservationGraph;
use crate::measurement::MeasurementSample;
use crate::observation::extract_co_observations;
use crate::propagation::{PoseEstimateSet, propagate};
use crate::types::{CameraId, CheckerboardId, WorldPose};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub camera_id: CameraId,
    pub pose: WorldPose,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPose {
    pub checkerboard_id: CheckerboardId,
    pub pose: WorldPose,
}

/// Starting point handed to the rig refinement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialEstimate {
    pub root_camera: CameraId,
    /// Sorted by camera id.
    pub cameras: Vec<CameraPose>,
    /// Sorted by checkerboard id.
    pub targets: Vec<TargetPose>,
}

impl InitialEstimate {
    pub fn camera(&self, camera_id: &str) -> Option<&WorldPose> {
        self.cameras
            .iter()
            .find(|c| c.camera_id == camera_id)
            .map(|c| &c.pose)
    }
    pub fn target(&self, checkerboard_id: CheckerboardId) -> Option<&WorldPose> {
        self.targets
            .iter()
            .find(|t| t.checkerboard_id == checkerboard_id)
            .map(|t| &t.pose)
    }
}

/// Cameras and checkerboard instances an estimate has to cover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coverage {
    pub cameras: BTreeSet<CameraId>,
    pub checkerboards: BTreeSet<CheckerboardId>,
}

impl Coverage {
    /// Every camera that appears in a sample, and every checkerboard seen by at
    /// least two distinct cameras.
    pub fn required_by(samples: &[MeasurementSample]) -> Coverage {
        let mut coverage = Coverage::default();
        for (checkerboard_id, sample) in samples.iter().enumerate() {
            for det in &sample.detections {
                coverage.cameras.insert(det.camera_id.clone());
            }
            if sample.camera_count() >= 2 {
                coverage.checkerboards.insert(checkerboard_id);
            }
        }
        coverage
    }
}

/// Packs propagated poses into an `InitialEstimate`, failing when anything in
/// `required` has no pose.
pub fn assemble(poses: PoseEstimateSet, required: &Coverage) -> Result<InitialEstimate> {
    let missing_cameras: Vec<CameraId> = required
        .cameras
        .iter()
        .filter(|c| !poses.cameras.contains_key(*c))
        .cloned()
        .collect();
    let missing_checkerboards: Vec<CheckerboardId> = required
        .checkerboards
        .iter()
        .filter(|id| !poses.checkerboards.contains_key(*id))
        .copied()
        .collect();
    if !missing_cameras.is_empty() || !missing_checkerboards.is_empty() {
        warn!(
            "{} camera(s) and {} checkerboard(s) unreachable from {}",
            missing_cameras.len(),
            missing_checkerboards.len(),
            poses.root
        );
        return Err(ExtrinsicInitError::InsufficientCoverage {
            root: poses.root,
            missing_cameras,
            missing_checkerboards,
        });
    }

    Ok(InitialEstimate {
        root_camera: poses.root,
        cameras: poses
            .cameras
            .into_iter()
            .map(|(camera_id, pose)| CameraPose { camera_id, pose })
            .collect(),
        targets: poses
            .checkerboards
            .into_iter()
            .map(|(checkerboard_id, pose)| TargetPose {
                checkerboard_id,
                pose,
            })
            .collect(),
    })
}

/// Picks the root: `root` if some sample saw it, otherwise the
/// lexicographically smallest camera of the graph, falling back to the
/// smallest camera of any sample when no two cameras ever met.
pub fn select_root<'a>(
    graph: &'a MutualObservationGraph,
    required: &'a Coverage,
    root: Option<&'a str>,
) -> Result<&'a str> {
    match root {
        Some(root) if required.cameras.contains(root) => Ok(root),
        Some(root) => Err(ExtrinsicInitError::UnknownRootCamera(root.to_string())),
        None => graph
            .default_root()
            .or_else(|| required.cameras.first().map(|c| c.as_str()))
            .ok_or(ExtrinsicInitError::NoDetections),
    }
}

/// Extract, build, propagate and assemble in one go.
pub fn find_initial_poses(
    samples: &[MeasurementSample],
    root: Option<&str>,
) -> Result<InitialEstimate> {
    let co_observations = extract_co_observations(samples);
    let graph = MutualObservationGraph::build(&co_observations);
    let required = Coverage::required_by(samples);
    let root = select_root(&graph, &required, root)?;
    info!("using {} as root camera", root);
    let poses = propagate(&graph, root);
    assemble(poses, &required)
}

/// Nonlinear refinement that consumes an initial estimate.
pub trait EstimateRefiner {
    fn refine(
        &self,
        samples: &[MeasurementSample],
        initial: &InitialEstimate,
    ) -> Result<InitialEstimate>;
}

pub fn refine_with<R: EstimateRefiner>(
    refiner: &R,
    samples: &[MeasurementSample],
    root: Option<&str>,
) -> Result<InitialEstimate> {
    let initial = find_initial_poses(samples, root)?;
    refiner.refine(samples, &initial)
}
