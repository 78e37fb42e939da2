//! Batch processing of sensor packages.
//!
//! Each package is decoded and summarized on its own; a bad package is
//! reported and skipped without affecting the rest of the batch.

use crate::metrics::calculator::summarize;
use crate::recording::summary::{MessageLocale, WorkoutSummary};
use crate::workouts::parser::read_package;
use crate::workouts::types::{WorkoutPackage, WorkoutResult};

/// Built-in packages processed when no others are configured.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Decode and summarize one package.
pub fn process_package(package: &WorkoutPackage) -> WorkoutResult<WorkoutSummary> {
    let reading = read_package(&package.code, &package.data)?;
    Ok(summarize(&reading))
}

/// Process every package in order, one outcome per package.
pub fn process_batch(packages: &[WorkoutPackage]) -> Vec<WorkoutResult<WorkoutSummary>> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let outcome = process_package(package);
            if let Err(e) = &outcome {
                tracing::warn!(index, code = %package.code, "Rejected workout package: {}", e);
            }
            outcome
        })
        .collect()
}

/// Render one outcome as the line printed for it.
pub fn render_outcome(outcome: &WorkoutResult<WorkoutSummary>, locale: MessageLocale) -> String {
    match outcome {
        Ok(summary) => summary.message(locale),
        Err(_) => locale.failure_message().to_string(),
    }
}

/// Process a batch and render one line per package.
pub fn run_batch(packages: &[WorkoutPackage], locale: MessageLocale) -> Vec<String> {
    process_batch(packages)
        .iter()
        .map(|outcome| render_outcome(outcome, locale))
        .collect()
}
