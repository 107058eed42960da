use camera_extrinsic_init::types::{BoardInCamera, RvecTvec, ToRvecTvec, WorldPose, pose_difference};
use nalgebra as na;

#[test]
fn test_rvec_tvec_conversion() {
    let rvec_in = na::Vector3::new(0.1, 0.2, 0.3);
    let tvec_in = na::Vector3::new(1.0, 2.0, 3.0);

    let rt = RvecTvec::new(&rvec_in, &tvec_in);
    let iso = rt.to_na_isometry3();
    let rt_back = iso.to_rvec_tvec();

    assert!((rt_back.na_rvec() - rvec_in).norm() < 1e-9);
    assert!((rt_back.na_tvec() - tvec_in).norm() < 1e-9);
}

#[test]
fn test_observe_composes_camera_then_board() {
    let world_cam = na::Isometry3::new(na::Vector3::new(1.0, 0.0, 0.0), na::Vector3::new(0.0, 0.0, 0.5));
    let cam_board = na::Isometry3::new(na::Vector3::new(0.0, 0.0, 2.0), na::Vector3::new(0.1, 0.0, 0.0));

    let world_board = WorldPose::new(world_cam).observe(&BoardInCamera::new(cam_board));

    let (dt, dr) = pose_difference(world_board.isometry(), &(world_cam * cam_board));
    assert!(dt < 1e-12);
    assert!(dr < 1e-12);
}

#[test]
fn test_relay_places_second_camera_on_same_board() {
    let world_c1 = na::Isometry3::new(na::Vector3::new(0.5, -0.2, 0.1), na::Vector3::new(0.0, 0.3, 0.0));
    let world_c2 = na::Isometry3::new(na::Vector3::new(-1.0, 0.4, 0.0), na::Vector3::new(0.2, -0.1, 0.4));
    let world_board = na::Isometry3::new(na::Vector3::new(0.0, 0.0, 3.0), na::Vector3::new(0.0, 0.0, 0.2));

    let board_in_c1 = BoardInCamera::new(world_c1.inverse() * world_board);
    let board_in_c2 = BoardInCamera::new(world_c2.inverse() * world_board);

    let c2 = WorldPose::new(world_c1).relay(&board_in_c1, &board_in_c2);
    let (dt, dr) = pose_difference(c2.isometry(), &world_c2);
    assert!(dt < 1e-9, "translation off by {}", dt);
    assert!(dr < 1e-9, "rotation off by {}", dr);
}

#[test]
fn test_pose_serializes_as_rvec_tvec() {
    let pose = WorldPose::new(na::Isometry3::new(
        na::Vector3::new(1.0, 2.0, 3.0),
        na::Vector3::new(0.0, 0.0, 0.25),
    ));
    let json = serde_json::to_value(pose).unwrap();
    assert!(json["rvec"].is_array());
    assert!((json["tvec"][2].as_f64().unwrap() - 3.0).abs() < 1e-12);
    assert!((json["rvec"][2].as_f64().unwrap() - 0.25).abs() < 1e-12);

    let back: WorldPose = serde_json::from_value(json).unwrap();
    let (dt, dr) = pose_difference(back.isometry(), pose.isometry());
    assert!(dt < 1e-12 && dr < 1e-12);
}
