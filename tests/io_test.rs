use camera_extrinsic_init::config::InitConfig;
use camera_extrinsic_init::io::{
    object_from_json, object_to_json, samples_from_json, samples_to_json, write_estimate_report,
};
use camera_extrinsic_init::synthetic::{SyntheticRig, SyntheticRigConfig};
use camera_extrinsic_init::util::validate_estimate;
use camera_extrinsic_init::{
    ExtrinsicInitError, InitialEstimate, MutualObservationGraph, extract_co_observations,
    find_initial_poses,
};
use tempfile::TempDir;

#[test]
fn test_samples_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("samples.json");
    let path = path.to_str().unwrap();

    let rig = SyntheticRig::generate(&SyntheticRigConfig::default());
    samples_to_json(path, &rig.samples).unwrap();
    let loaded = samples_from_json(path).unwrap();

    assert_eq!(loaded.len(), rig.samples.len());
    for (a, b) in loaded.iter().zip(&rig.samples) {
        let ids_a: Vec<_> = a.detections.iter().map(|d| &d.camera_id).collect();
        let ids_b: Vec<_> = b.detections.iter().map(|d| &d.camera_id).collect();
        assert_eq!(ids_a, ids_b);
    }
}

#[test]
fn test_hand_written_sample_log() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("log.json");
    let content = r#"[
        {"detections": [
            {"camera_id": "left", "board_pose": {"rvec": [0.0, 0.0, 0.0], "tvec": [0.0, 0.0, 2.0]}},
            {"camera_id": "right", "board_pose": {"rvec": [0.0, 0.0, 0.0], "tvec": [-0.1, 0.0, 2.0]}}
        ]}
    ]"#;
    std::fs::write(&path, content).unwrap();

    let samples = samples_from_json(path.to_str().unwrap()).unwrap();
    let estimate = find_initial_poses(&samples, None).unwrap();
    let right = estimate.camera("right").unwrap();
    assert!((right.isometry().translation.vector.x - 0.1).abs() < 1e-12);
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        samples_from_json("non_existent_path.json"),
        Err(ExtrinsicInitError::Io(_))
    ));
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{"root_camera": "cam2"}"#).unwrap();

    let config: InitConfig = object_from_json(path.to_str().unwrap()).unwrap();
    assert_eq!(config.root_camera.as_deref(), Some("cam2"));
    assert_eq!(config.outlier_factor, InitConfig::default().outlier_factor);
    assert!(config.report_path.is_none());
}

#[test]
fn test_estimate_and_report_files() {
    let temp_dir = TempDir::new().unwrap();
    let estimate_path = temp_dir.path().join("estimate.json");
    let report_path = temp_dir.path().join("report.json");

    let rig = SyntheticRig::generate(&SyntheticRigConfig::default());
    let estimate = find_initial_poses(&rig.samples, None).unwrap();
    object_to_json(estimate_path.to_str().unwrap(), &estimate).unwrap();
    let loaded: InitialEstimate = object_from_json(estimate_path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.root_camera, estimate.root_camera);
    assert_eq!(loaded.cameras.len(), estimate.cameras.len());
    assert_eq!(loaded.targets.len(), estimate.targets.len());

    let graph = MutualObservationGraph::build(&extract_co_observations(&rig.samples));
    let residuals = validate_estimate(&graph, &estimate);
    write_estimate_report(report_path.to_str().unwrap(), &estimate, &residuals, 3.0).unwrap();

    let content = std::fs::read_to_string(&report_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["root_camera"], "cam0");
    assert_eq!(json["cameras"].as_array().unwrap().len(), 4);
    assert!(json["cameras"][0]["pose_in_root"]["rvec"].is_array());
    assert!(json["max_translation_residual"].as_f64().unwrap() < 1e-6);
    assert!(json["outlier_pairs"].as_array().unwrap().is_empty());
}
