use serde::{Deserialize, Serialize};

use crate::types::CameraId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitConfig {
    /// Camera whose frame becomes the world frame. Lexicographically smallest
    /// camera id when unset.
    pub root_camera: Option<CameraId>,
    /// Edge residuals above `outlier_factor * median` are reported.
    pub outlier_factor: f64,
    pub report_path: Option<String>,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            root_camera: None,
            outlier_factor: 3.0,
            report_path: None,
        }
    }
}
