use std::io::Write;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;
use crate::estimate::InitialEstimate;
use crate::measurement::MeasurementSample;
use crate::types::RvecTvec;
use crate::util::{EdgeResidual, analyze_outliers};

/// Serializes an object to a JSON file.
pub fn object_to_json<T: Serialize>(output_path: &str, object: &T) -> Result<()> {
    let j = serde_json::to_string_pretty(object)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(j.as_bytes())?;
    Ok(())
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Reads a recorded sample log. Sample order in the file is kept.
pub fn samples_from_json(file_path: &str) -> Result<Vec<MeasurementSample>> {
    let samples: Vec<MeasurementSample> = object_from_json(file_path)?;
    log::info!("loaded {} samples from {}", samples.len(), file_path);
    Ok(samples)
}

pub fn samples_to_json(output_path: &str, samples: &[MeasurementSample]) -> Result<()> {
    object_to_json(output_path, &samples)
}

#[derive(Serialize)]
struct EstimateReport {
    timestamp: String,
    root_camera: String,
    cameras: Vec<CameraReport>,
    target_count: usize,
    edge_count: usize,
    max_translation_residual: f64,
    max_rotation_residual: f64,
    outlier_pairs: Vec<(String, String)>,
    recommendations: Vec<String>,
}

#[derive(Serialize)]
struct CameraReport {
    camera_id: String,
    pose_in_root: RvecTvec,
}

/// Writes a JSON summary of an estimate and its edge residuals.
pub fn write_estimate_report(
    output_path: &str,
    estimate: &InitialEstimate,
    residuals: &[EdgeResidual],
    outlier_factor: f64,
) -> Result<()> {
    use std::time::SystemTime;

    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let cameras = estimate
        .cameras
        .iter()
        .map(|c| CameraReport {
            camera_id: c.camera_id.clone(),
            pose_in_root: c.pose.into(),
        })
        .collect();
    let (outlier_pairs, recommendations) = analyze_outliers(residuals, outlier_factor);

    let report = EstimateReport {
        timestamp: timestamp.to_string(),
        root_camera: estimate.root_camera.clone(),
        cameras,
        target_count: estimate.targets.len(),
        edge_count: residuals.len(),
        max_translation_residual: residuals.iter().map(|r| r.translation).fold(0.0, f64::max),
        max_rotation_residual: residuals.iter().map(|r| r.rotation).fold(0.0, f64::max),
        outlier_pairs,
        recommendations,
    };

    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
