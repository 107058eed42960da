use camera_extrinsic_init::io::{object_from_json, object_to_json, samples_to_json};
use camera_extrinsic_init::synthetic::{SyntheticRig, SyntheticRigConfig};
use camera_extrinsic_init::types::RvecTvec;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic multi-camera sample log
    Generate {
        /// Output directory
        #[arg(short, long)]
        output: String,

        /// Rig configuration JSON
        #[arg(short, long)]
        rig_config: Option<String>,

        /// Number of samples, overrides the rig configuration
        #[arg(short, long)]
        num_samples: Option<usize>,

        /// Random seed, overrides the rig configuration
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Generate {
            output,
            rig_config,
            num_samples,
            seed,
        } => {
            let mut config: SyntheticRigConfig = match rig_config {
                Some(path) => object_from_json(&path)?,
                None => SyntheticRigConfig::default(),
            };
            if let Some(n) = num_samples {
                config.sample_num = n;
            }
            if let Some(s) = seed {
                config.seed = s;
            }
            generate_dataset(&output, &config)?;
        }
    }

    Ok(())
}

fn generate_dataset(
    output_dir: &str,
    config: &SyntheticRigConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;
    let rig = SyntheticRig::generate(config);

    let path_str = |name: &str| Path::new(output_dir).join(name).to_string_lossy().to_string();
    samples_to_json(&path_str("samples.json"), &rig.samples)?;

    let ground_truth: Vec<(String, RvecTvec)> = rig
        .camera_ids
        .iter()
        .zip(&rig.world_cameras)
        .map(|(id, pose)| (id.clone(), (*pose).into()))
        .collect();
    object_to_json(&path_str("ground_truth.json"), &ground_truth)?;
    object_to_json(&path_str("rig.json"), config)?;

    println!(
        "Generated {} samples for {} cameras in {}",
        rig.samples.len(),
        rig.camera_ids.len(),
        output_dir
    );
    Ok(())
}
