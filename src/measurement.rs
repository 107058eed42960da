use serde::{Deserialize, Serialize};

use crate::types::{BoardInCamera, CameraId};

/// One camera's view of the checkerboard during a capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDetection {
    pub camera_id: CameraId,
    pub board_pose: BoardInCamera,
}

/// A single capture event. Every detection refers to the same physical
/// checkerboard placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSample {
    pub detections: Vec<CameraDetection>,
}

impl MeasurementSample {
    pub fn new(detections: Vec<CameraDetection>) -> MeasurementSample {
        MeasurementSample { detections }
    }

    pub fn with_detection(mut self, camera_id: &str, board_pose: BoardInCamera) -> Self {
        self.detections.push(CameraDetection {
            camera_id: camera_id.to_string(),
            board_pose,
        });
        self
    }

    /// Number of distinct cameras in this sample.
    pub fn camera_count(&self) -> usize {
        let mut ids: Vec<&str> = self.detections.iter().map(|d| d.camera_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}
