use std::collections::{BTreeMap, VecDeque};

use log::{debug, info, trace};

use crate::graph::MutualObservationGraph;
use crate::types::{CameraId, CheckerboardId, WorldPose};

/// World poses found by a traversal. Each key is written exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseEstimateSet {
    pub root: CameraId,
    pub cameras: BTreeMap<CameraId, WorldPose>,
    pub checkerboards: BTreeMap<CheckerboardId, WorldPose>,
}

impl PoseEstimateSet {
    pub fn camera(&self, camera_id: &str) -> Option<&WorldPose> {
        self.cameras.get(camera_id)
    }
    pub fn checkerboard(&self, checkerboard_id: CheckerboardId) -> Option<&WorldPose> {
        self.checkerboards.get(&checkerboard_id)
    }
}

/// Breadth-first pose propagation from `root_camera`.
///
/// The root gets the identity. A newly reached camera is placed through the
/// first shared observation of the edge it was reached by, and every
/// checkerboard on that edge is placed from the camera being expanded.
/// Nothing is overwritten once set. Cameras not connected to the root are
/// left out.
pub fn propagate(graph: &MutualObservationGraph, root_camera: &str) -> PoseEstimateSet {
    let mut cameras = BTreeMap::new();
    let mut checkerboards = BTreeMap::new();
    let mut queue = VecDeque::new();

    cameras.insert(root_camera.to_string(), WorldPose::identity());
    queue.push_back(root_camera.to_string());

    while let Some(cam1) = queue.pop_front() {
        let cam1_pose = cameras[&cam1];
        debug!("expanding {}", cam1);

        for edge in graph.neighbors(&cam1) {
            let observations = edge.observations();
            assert!(
                !observations.is_empty(),
                "edge {} <-> {} has no shared observation",
                cam1,
                edge.neighbor()
            );
            let cam2 = edge.neighbor();
            if !cameras.contains_key(cam2) {
                let first = &observations[0];
                let cam2_pose = cam1_pose.relay(&first.board_in_self, &first.board_in_other);
                trace!(
                    "{} placed from {} via checkerboard {}",
                    cam2, cam1, first.checkerboard_id
                );
                cameras.insert(cam2.to_string(), cam2_pose);
                queue.push_back(cam2.to_string());
            }

            for obs in observations {
                checkerboards
                    .entry(obs.checkerboard_id)
                    .or_insert_with(|| cam1_pose.observe(&obs.board_in_self));
            }
        }
    }

    info!(
        "propagated from {}: {} cameras, {} checkerboards",
        root_camera,
        cameras.len(),
        checkerboards.len()
    );
    PoseEstimateSet {
        root: root_camera.to_string(),
        cameras,
        checkerboards,
    }
}
