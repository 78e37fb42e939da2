//! Decode raw sensor packages into typed readings.

use crate::workouts::types::{
    BaseReading, WorkoutError, WorkoutKind, WorkoutReading, WorkoutResult,
};

/// Read a package from the sensor unit.
///
/// Looks up the workout kind by `code`, checks that `data` has the arity
/// that kind expects and validates each value.
pub fn read_package(code: &str, data: &[f64]) -> WorkoutResult<WorkoutReading> {
    let kind: WorkoutKind = code.parse()?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let base = BaseReading {
        action_count: count("action_count", data[0])?,
        duration_hours: positive("duration_hours", data[1])?,
        weight_kg: positive("weight_kg", data[2])?,
    };

    let reading = match kind {
        WorkoutKind::Running => WorkoutReading::Running { base },
        WorkoutKind::RaceWalking => WorkoutReading::RaceWalking {
            base,
            height_cm: positive("height_cm", data[3])?,
        },
        WorkoutKind::Swimming => WorkoutReading::Swimming {
            base,
            pool_length_m: positive("pool_length_m", data[3])?,
            pool_lap_count: count("pool_lap_count", data[4])?,
        },
    };

    Ok(reading)
}

fn positive(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidReading { field, value })
    }
}

fn count(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidReading { field, value })
    }
}
