use nalgebra as na;
use serde::{Deserialize, Serialize};

pub type CameraId = String;

/// Sample index of the capture that observed the board.
pub type CheckerboardId = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RvecTvec {
    rvec: [f64; 3],
    tvec: [f64; 3],
}

impl RvecTvec {
    pub fn new(rvec: &na::Vector3<f64>, tvec: &na::Vector3<f64>) -> RvecTvec {
        RvecTvec {
            rvec: [rvec.x, rvec.y, rvec.z],
            tvec: [tvec.x, tvec.y, tvec.z],
        }
    }
    pub fn na_rvec(&self) -> na::Vector3<f64> {
        na::Vector3::from_row_slice(&self.rvec)
    }
    pub fn na_tvec(&self) -> na::Vector3<f64> {
        na::Vector3::from_row_slice(&self.tvec)
    }
    pub fn to_na_isometry3(&self) -> na::Isometry3<f64> {
        na::Isometry3::new(self.na_tvec(), self.na_rvec())
    }
}

pub trait ToRvecTvec {
    fn to_rvec_tvec(&self) -> RvecTvec;
}

impl ToRvecTvec for na::Isometry3<f64> {
    fn to_rvec_tvec(&self) -> RvecTvec {
        let rvec = self.rotation.scaled_axis();
        let tvec = self.translation.vector;
        RvecTvec::new(&rvec, &tvec)
    }
}

/// Checkerboard pose expressed in a camera frame (`T_cam_board`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RvecTvec", into = "RvecTvec")]
pub struct BoardInCamera(na::Isometry3<f64>);

impl BoardInCamera {
    pub fn new(cam_board: na::Isometry3<f64>) -> BoardInCamera {
        BoardInCamera(cam_board)
    }
    pub fn isometry(&self) -> &na::Isometry3<f64> {
        &self.0
    }
}

impl From<RvecTvec> for BoardInCamera {
    fn from(rt: RvecTvec) -> Self {
        BoardInCamera(rt.to_na_isometry3())
    }
}

impl From<BoardInCamera> for RvecTvec {
    fn from(p: BoardInCamera) -> Self {
        p.0.to_rvec_tvec()
    }
}

/// Pose of a camera or a checkerboard resolved in the root camera's frame
/// (`T_world_x`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RvecTvec", into = "RvecTvec")]
pub struct WorldPose(na::Isometry3<f64>);

impl WorldPose {
    pub fn new(world_x: na::Isometry3<f64>) -> WorldPose {
        WorldPose(world_x)
    }
    pub fn identity() -> WorldPose {
        WorldPose(na::Isometry3::identity())
    }
    pub fn isometry(&self) -> &na::Isometry3<f64> {
        &self.0
    }

    /// `T_world_board = T_world_cam * T_cam_board`, with `self` the camera.
    pub fn observe(&self, board: &BoardInCamera) -> WorldPose {
        WorldPose(self.0 * board.0)
    }

    /// Pose of a second camera that saw the same board:
    /// `T_world_c2 = T_world_c1 * T_c1_board * T_c2_board^-1`.
    pub fn relay(&self, board_in_self: &BoardInCamera, board_in_other: &BoardInCamera) -> WorldPose {
        WorldPose(self.0 * board_in_self.0 * board_in_other.0.inverse())
    }
}

impl From<RvecTvec> for WorldPose {
    fn from(rt: RvecTvec) -> Self {
        WorldPose(rt.to_na_isometry3())
    }
}

impl From<WorldPose> for RvecTvec {
    fn from(p: WorldPose) -> Self {
        p.0.to_rvec_tvec()
    }
}

/// Translation distance and rotation angle (rad) between two isometries.
pub fn pose_difference(a: &na::Isometry3<f64>, b: &na::Isometry3<f64>) -> (f64, f64) {
    let delta = a.inverse() * b;
    (delta.translation.vector.norm(), delta.rotation.angle())
}
