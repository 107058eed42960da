use camera_extrinsic_init::config::InitConfig;
use camera_extrinsic_init::extract_co_observations;
use camera_extrinsic_init::graph::MutualObservationGraph;
use camera_extrinsic_init::io::{object_from_json, object_to_json, samples_from_json, write_estimate_report};
use camera_extrinsic_init::util::validate_estimate;
use camera_extrinsic_init::find_initial_poses;
use clap::Parser;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct CeinitCli {
    /// path to the recorded samples (json)
    path: String,

    /// camera used as the world frame
    #[arg(short, long)]
    root: Option<String>,

    /// json config file
    #[arg(short, long)]
    config: Option<String>,

    /// where to write the initial estimate
    #[arg(short, long, default_value = "initial_estimate.json")]
    output: String,

    /// where to write the consistency report
    #[arg(long)]
    report: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = CeinitCli::parse();
    let mut config: InitConfig = match &cli.config {
        Some(path) => object_from_json(path)?,
        None => InitConfig::default(),
    };
    if cli.root.is_some() {
        config.root_camera = cli.root;
    }
    if cli.report.is_some() {
        config.report_path = cli.report;
    }

    let samples = samples_from_json(&cli.path)?;
    let now = Instant::now();
    let estimate = find_initial_poses(&samples, config.root_camera.as_deref())?;
    log::info!(
        "initial estimate took {:.6} sec",
        now.elapsed().as_secs_f64()
    );
    object_to_json(&cli.output, &estimate)?;
    println!(
        "{} cameras and {} targets relative to {} written to {}",
        estimate.cameras.len(),
        estimate.targets.len(),
        estimate.root_camera,
        cli.output
    );

    if let Some(report_path) = &config.report_path {
        let graph = MutualObservationGraph::build(&extract_co_observations(&samples));
        let residuals = validate_estimate(&graph, &estimate);
        write_estimate_report(report_path, &estimate, &residuals, config.outlier_factor)?;
    }
    Ok(())
}
