use std::collections::BTreeMap;

use serde::Serialize;

use crate::estimate::InitialEstimate;
use crate::graph::MutualObservationGraph;
use crate::types::{CameraId, CheckerboardId, pose_difference};

/// Residuals below this (meters) are never reported as outliers.
const MIN_OUTLIER_RESIDUAL: f64 = 1e-6;

/// Disagreement between two cameras about where a shared checkerboard sits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeResidual {
    pub cam1: CameraId,
    pub cam2: CameraId,
    pub checkerboard_id: CheckerboardId,
    pub translation: f64,
    pub rotation: f64,
}

/// Compares `T_world_cam1 * T_cam1_board` with `T_world_cam2 * T_cam2_board`
/// for every shared observation. Each unordered pair is reported once, with
/// `cam1` the camera that comes first in the graph.
pub fn validate_estimate(
    graph: &MutualObservationGraph,
    estimate: &InitialEstimate,
) -> Vec<EdgeResidual> {
    let mut residuals = Vec::new();
    let order: Vec<&str> = graph.cameras().collect();
    for (i, cam1) in order.iter().enumerate() {
        let Some(cam1_pose) = estimate.camera(cam1) else {
            continue;
        };
        for edge in graph.neighbors(cam1) {
            let cam2 = edge.neighbor();
            if order[..i].contains(&cam2) {
                continue;
            }
            let Some(cam2_pose) = estimate.camera(cam2) else {
                continue;
            };
            for obs in edge.observations() {
                let via1 = cam1_pose.observe(&obs.board_in_self);
                let via2 = cam2_pose.observe(&obs.board_in_other);
                let (translation, rotation) = pose_difference(via1.isometry(), via2.isometry());
                residuals.push(EdgeResidual {
                    cam1: cam1.to_string(),
                    cam2: cam2.to_string(),
                    checkerboard_id: obs.checkerboard_id,
                    translation,
                    rotation,
                });
            }
        }
    }
    residuals
}

fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Camera pairs holding a translation residual above `factor * median`, with
/// a hint for each.
pub fn analyze_outliers(
    residuals: &[EdgeResidual],
    factor: f64,
) -> (Vec<(CameraId, CameraId)>, Vec<String>) {
    let mut translations: Vec<f64> = residuals.iter().map(|r| r.translation).collect();
    let med = median(&mut translations);
    let threshold = factor * med;

    let mut worst: BTreeMap<(CameraId, CameraId), f64> = BTreeMap::new();
    for r in residuals {
        if r.translation > threshold && r.translation > MIN_OUTLIER_RESIDUAL {
            let key = (r.cam1.clone(), r.cam2.clone());
            let entry = worst.entry(key).or_insert(0.0);
            *entry = entry.max(r.translation);
        }
    }

    let recommendations = worst
        .iter()
        .map(|((cam1, cam2), err)| {
            format!(
                "{} <-> {}: residual {:.4} m exceeds {:.4} m, check detections shared by these cameras",
                cam1, cam2, err, threshold
            )
        })
        .collect();
    (worst.into_keys().collect(), recommendations)
}
