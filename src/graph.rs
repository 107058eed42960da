use std::collections::HashMap;

use log::trace;

use crate::observation::CoObservation;
use crate::types::{BoardInCamera, CameraId, CheckerboardId};

/// One shared sighting, seen from the camera that owns the adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedObservation {
    pub board_in_self: BoardInCamera,
    pub board_in_other: BoardInCamera,
    pub checkerboard_id: CheckerboardId,
}

#[derive(Debug, Clone)]
pub struct Edge {
    neighbor: CameraId,
    observations: Vec<SharedObservation>,
}

impl Edge {
    pub fn neighbor(&self) -> &str {
        &self.neighbor
    }
    /// Never empty; ordered by sample.
    pub fn observations(&self) -> &[SharedObservation] {
        &self.observations
    }
}

#[derive(Debug, Clone)]
struct CameraNode {
    camera_id: CameraId,
    edges: Vec<Edge>,
}

impl CameraNode {
    fn push(&mut self, neighbor: &str, observation: SharedObservation) {
        match self.edges.iter_mut().find(|e| e.neighbor == neighbor) {
            Some(edge) => edge.observations.push(observation),
            None => self.edges.push(Edge {
                neighbor: neighbor.to_string(),
                observations: vec![observation],
            }),
        }
    }
}

/// Symmetric multigraph of cameras that saw a checkerboard together.
///
/// Cameras and their neighbors are kept in first-seen order so traversal is
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct MutualObservationGraph {
    index: HashMap<CameraId, usize>,
    nodes: Vec<CameraNode>,
}

impl MutualObservationGraph {
    pub fn build(co_observations: &[CoObservation]) -> MutualObservationGraph {
        let mut graph = MutualObservationGraph::default();
        for co in co_observations {
            trace!(
                "edge {} <-> {} via checkerboard {}",
                co.cam1, co.cam2, co.checkerboard_id
            );
            graph.node_mut(&co.cam1).push(
                &co.cam2,
                SharedObservation {
                    board_in_self: co.board_in_cam1,
                    board_in_other: co.board_in_cam2,
                    checkerboard_id: co.checkerboard_id,
                },
            );
            graph.node_mut(&co.cam2).push(
                &co.cam1,
                SharedObservation {
                    board_in_self: co.board_in_cam2,
                    board_in_other: co.board_in_cam1,
                    checkerboard_id: co.checkerboard_id,
                },
            );
        }
        graph
    }

    fn node_mut(&mut self, camera_id: &str) -> &mut CameraNode {
        let idx = match self.index.get(camera_id) {
            Some(&idx) => idx,
            None => {
                self.index.insert(camera_id.to_string(), self.nodes.len());
                self.nodes.push(CameraNode {
                    camera_id: camera_id.to_string(),
                    edges: Vec::new(),
                });
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[idx]
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, camera_id: &str) -> bool {
        self.index.contains_key(camera_id)
    }

    /// Cameras in first-seen order.
    pub fn cameras(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.camera_id.as_str())
    }

    /// Edges of `camera_id` in first-seen order; empty for unknown cameras.
    pub fn neighbors(&self, camera_id: &str) -> &[Edge] {
        self.index
            .get(camera_id)
            .map(|&idx| self.nodes[idx].edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge(&self, cam1: &str, cam2: &str) -> Option<&Edge> {
        self.neighbors(cam1).iter().find(|e| e.neighbor == cam2)
    }

    /// Lexicographically smallest camera id.
    pub fn default_root(&self) -> Option<&str> {
        self.cameras().min()
    }
}
