//! Workout Metrics
//!
//! Computes distance, mean speed and calories spent from raw sensor
//! packages for running, race walking and swimming, and renders a one-line
//! summary per workout.

pub mod metrics;
pub mod recording;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use metrics::calculator::summarize;
pub use recording::summary::{MessageLocale, WorkoutSummary};
pub use storage::config::AppConfig;
pub use workouts::parser::read_package;
pub use workouts::types::{WorkoutError, WorkoutKind, WorkoutPackage, WorkoutReading};
