use log::{debug, warn};

use crate::measurement::{CameraDetection, MeasurementSample};
use crate::types::{BoardInCamera, CameraId, CheckerboardId};

/// Two cameras seeing the same checkerboard placement in one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CoObservation {
    pub cam1: CameraId,
    pub cam2: CameraId,
    pub board_in_cam1: BoardInCamera,
    pub board_in_cam2: BoardInCamera,
    pub checkerboard_id: CheckerboardId,
}

/// Keeps the first detection of each camera; repeated camera ids within a
/// sample are dropped.
fn unique_detections(sample_idx: usize, sample: &MeasurementSample) -> Vec<&CameraDetection> {
    let mut out: Vec<&CameraDetection> = Vec::with_capacity(sample.detections.len());
    for det in &sample.detections {
        if out.iter().any(|d| d.camera_id == det.camera_id) {
            warn!(
                "sample {} has a repeated detection from {}, ignoring it",
                sample_idx, det.camera_id
            );
            continue;
        }
        out.push(det);
    }
    out
}

/// Emits one record per unordered camera pair of every sample. The sample
/// index is the checkerboard instance id. Pairs follow detection order.
pub fn extract_co_observations(samples: &[MeasurementSample]) -> Vec<CoObservation> {
    let mut co_observations = Vec::new();
    for (checkerboard_id, sample) in samples.iter().enumerate() {
        let detections = unique_detections(checkerboard_id, sample);
        if detections.len() < 2 {
            debug!(
                "sample {} has {} detection(s), no mutual observation",
                checkerboard_id,
                detections.len()
            );
            continue;
        }
        for (i, d1) in detections.iter().enumerate() {
            for d2 in &detections[i + 1..] {
                co_observations.push(CoObservation {
                    cam1: d1.camera_id.clone(),
                    cam2: d2.camera_id.clone(),
                    board_in_cam1: d1.board_pose,
                    board_in_cam2: d2.board_pose,
                    checkerboard_id,
                });
            }
        }
    }
    debug!(
        "extracted {} co-observations from {} samples",
        co_observations.len(),
        samples.len()
    );
    co_observations
}
