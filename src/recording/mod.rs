//! Workout summaries and their rendered messages.

pub mod summary;

pub use summary::{MessageLocale, WorkoutSummary};
