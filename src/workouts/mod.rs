//! Workout module: sensor package decoding and batch processing.

pub mod batch;
pub mod parser;
pub mod types;

pub use batch::{process_batch, process_package, render_outcome, run_batch, sample_packages};
pub use parser::read_package;
pub use types::{
    BaseReading, WorkoutError, WorkoutKind, WorkoutPackage, WorkoutReading, WorkoutResult,
};
