pub mod config;
pub mod error;
pub mod estimate;
pub mod graph;
pub mod io;
pub mod measurement;
pub mod observation;
pub mod propagation;
pub mod synthetic;
pub mod types;
pub mod util;

pub use error::{ExtrinsicInitError, Result};
pub use estimate::{InitialEstimate, assemble, find_initial_poses};
pub use graph::MutualObservationGraph;
pub use observation::extract_co_observations;
pub use propagation::{PoseEstimateSet, propagate};
