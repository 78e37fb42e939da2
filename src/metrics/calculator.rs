//! Metrics calculator for completed workouts.
//!
//! Distance, mean speed and calorie formulas per workout kind, composed
//! into a [`WorkoutSummary`].

use crate::metrics::formulas::{M_IN_KM, MIN_IN_H, RACE_WALKING, RUNNING, SWIMMING};
use crate::recording::summary::WorkoutSummary;
use crate::workouts::types::{WorkoutKind, WorkoutReading};

/// Step (or stroke) length in meters for a workout kind.
pub fn step_length(kind: WorkoutKind) -> f64 {
    match kind {
        WorkoutKind::Running => RUNNING.step_length_m,
        WorkoutKind::RaceWalking => RACE_WALKING.step_length_m,
        WorkoutKind::Swimming => SWIMMING.stroke_length_m,
    }
}

/// Distance in kilometers covered by `action_count` steps of `step_length_m`.
pub fn distance(action_count: f64, step_length_m: f64) -> f64 {
    action_count * step_length_m / M_IN_KM
}

/// Distance in kilometers for a reading, from its action count.
pub fn reading_distance(reading: &WorkoutReading) -> f64 {
    distance(reading.base().action_count, step_length(reading.kind()))
}

/// Mean speed in km/h.
///
/// Swimming ignores the stroke count and uses pool length times laps.
pub fn average_speed(reading: &WorkoutReading) -> f64 {
    match reading {
        WorkoutReading::Running { base } | WorkoutReading::RaceWalking { base, .. } => {
            reading_distance(reading) / base.duration_hours
        }
        WorkoutReading::Swimming {
            base,
            pool_length_m,
            pool_lap_count,
        } => pool_length_m * pool_lap_count / M_IN_KM / base.duration_hours,
    }
}

/// Calories spent in kcal.
pub fn calories(reading: &WorkoutReading) -> f64 {
    let speed = average_speed(reading);

    match reading {
        WorkoutReading::Running { base } => {
            (RUNNING.speed_multiplier * speed - RUNNING.speed_shift) * base.weight_kg / M_IN_KM
                * base.duration_hours
                * MIN_IN_H
        }
        WorkoutReading::RaceWalking { base, height_cm } => {
            // speed² / height is floor-divided, not true-divided.
            let speed_term = (speed.powi(RACE_WALKING.speed_exponent) / height_cm).floor();
            (RACE_WALKING.weight_multiplier * base.weight_kg
                + speed_term * RACE_WALKING.speed_height_multiplier * base.weight_kg)
                * base.duration_hours
                * MIN_IN_H
        }
        WorkoutReading::Swimming { base, .. } => {
            (speed + SWIMMING.speed_shift) * SWIMMING.speed_multiplier * base.weight_kg
        }
    }
}

/// Compute the full summary for a reading.
pub fn summarize(reading: &WorkoutReading) -> WorkoutSummary {
    let summary = WorkoutSummary {
        workout_type: reading.kind().display_name().to_string(),
        duration_hours: reading.base().duration_hours,
        distance_km: reading_distance(reading),
        avg_speed_kmh: average_speed(reading),
        calories_kcal: calories(reading),
    };

    tracing::debug!(
        kind = reading.kind().code(),
        distance_km = summary.distance_km,
        calories_kcal = summary.calories_kcal,
        "Computed workout summary"
    );

    summary
}
