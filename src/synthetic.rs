use nalgebra as na;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::measurement::{CameraDetection, MeasurementSample};
use crate::types::{BoardInCamera, CameraId, WorldPose};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticRigConfig {
    pub camera_num: usize,
    /// Cameras sit on a circle of this radius, looking at its center.
    pub ring_radius_meter: f64,
    pub sample_num: usize,
    /// Consecutive cameras on the ring that see each placement. Sample `i`
    /// starts at camera `i % camera_num`.
    pub cameras_per_sample: usize,
    /// Half extent of the cube board placements are drawn from.
    pub board_spread_meter: f64,
    pub rotation_noise_rad: f64,
    pub translation_noise_meter: f64,
    pub seed: u64,
}

impl Default for SyntheticRigConfig {
    fn default() -> Self {
        Self {
            camera_num: 4,
            ring_radius_meter: 2.0,
            sample_num: 12,
            cameras_per_sample: 2,
            board_spread_meter: 0.3,
            rotation_noise_rad: 0.0,
            translation_noise_meter: 0.0,
            seed: 0,
        }
    }
}

/// Ground-truth rig with its generated samples.
pub struct SyntheticRig {
    pub camera_ids: Vec<CameraId>,
    pub world_cameras: Vec<WorldPose>,
    pub world_boards: Vec<WorldPose>,
    pub samples: Vec<MeasurementSample>,
}

fn random_vector(rng: &mut ChaCha8Rng, half_extent: f64) -> na::Vector3<f64> {
    if half_extent <= 0.0 {
        return na::Vector3::zeros();
    }
    na::Vector3::new(
        rng.random_range(-half_extent..half_extent),
        rng.random_range(-half_extent..half_extent),
        rng.random_range(-half_extent..half_extent),
    )
}

impl SyntheticRig {
    pub fn generate(config: &SyntheticRigConfig) -> SyntheticRig {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let camera_ids: Vec<CameraId> = (0..config.camera_num).map(|i| format!("cam{}", i)).collect();

        let world_cameras: Vec<WorldPose> = (0..config.camera_num)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / config.camera_num as f64;
                let eye = na::Point3::new(
                    config.ring_radius_meter * theta.cos(),
                    config.ring_radius_meter * theta.sin(),
                    0.2 * (i % 2) as f64,
                );
                WorldPose::new(na::Isometry3::face_towards(
                    &eye,
                    &na::Point3::origin(),
                    &na::Vector3::z(),
                ))
            })
            .collect();

        let mut world_boards = Vec::with_capacity(config.sample_num);
        let mut samples = Vec::with_capacity(config.sample_num);
        let per_sample = config.cameras_per_sample.min(config.camera_num);
        for sample_idx in 0..config.sample_num {
            let board = na::Isometry3::new(
                random_vector(&mut rng, config.board_spread_meter),
                random_vector(&mut rng, 0.3),
            );
            // round robin over the ring keeps neighbouring cameras connected
            let first = sample_idx % config.camera_num.max(1);
            let detections = (0..per_sample)
                .map(|k| {
                    let cam_idx = (first + k) % config.camera_num;
                    let noise = na::Isometry3::new(
                        random_vector(&mut rng, config.translation_noise_meter),
                        random_vector(&mut rng, config.rotation_noise_rad),
                    );
                    let cam_board = world_cameras[cam_idx].isometry().inverse() * board * noise;
                    CameraDetection {
                        camera_id: camera_ids[cam_idx].clone(),
                        board_pose: BoardInCamera::new(cam_board),
                    }
                })
                .collect();
            world_boards.push(WorldPose::new(board));
            samples.push(MeasurementSample::new(detections));
        }

        SyntheticRig {
            camera_ids,
            world_cameras,
            world_boards,
            samples,
        }
    }

    /// Ground truth of camera `idx` expressed in the frame of camera `root_idx`.
    pub fn camera_relative_to(&self, idx: usize, root_idx: usize) -> na::Isometry3<f64> {
        self.world_cameras[root_idx].isometry().inverse() * self.world_cameras[idx].isometry()
    }

    /// Ground truth of board `idx` expressed in the frame of camera `root_idx`.
    pub fn board_relative_to(&self, idx: usize, root_idx: usize) -> na::Isometry3<f64> {
        self.world_cameras[root_idx].isometry().inverse() * self.world_boards[idx].isometry()
    }
}
