//! Workout types, readings and errors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Kind of workout reported by the sensor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// Running (code `RUN`)
    Running,
    /// Race walking (code `WLK`)
    RaceWalking,
    /// Pool swimming (code `SWM`)
    Swimming,
}

impl WorkoutKind {
    /// Every supported workout kind.
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::RaceWalking,
    ];

    /// Three-letter code used by the sensor unit.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::RaceWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the summary message.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::RaceWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of values a raw reading for this kind must carry.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::RaceWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::RaceWalking),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }
}

/// Readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseReading {
    /// Steps or strokes counted by the sensor
    pub action_count: f64,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

/// Validated sensor reading for a single workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutReading {
    Running { base: BaseReading },
    RaceWalking {
        base: BaseReading,
        /// Athlete height in centimeters
        height_cm: f64,
    },
    Swimming {
        base: BaseReading,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_lap_count: f64,
    },
}

impl WorkoutReading {
    /// Workout kind of this reading.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutReading::Running { .. } => WorkoutKind::Running,
            WorkoutReading::RaceWalking { .. } => WorkoutKind::RaceWalking,
            WorkoutReading::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// Readings common to every kind.
    pub fn base(&self) -> &BaseReading {
        match self {
            WorkoutReading::Running { base }
            | WorkoutReading::RaceWalking { base, .. }
            | WorkoutReading::Swimming { base, .. } => base,
        }
    }
}

/// Raw package as received from the sensor unit: a code and its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Three-letter workout code
    pub code: String,
    /// Positional readings, meaning depends on the code
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

/// An unrecognized or malformed workout package.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{kind} expects {expected} readings, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid reading for {field}: {value}")]
    InvalidReading { field: &'static str, value: f64 },
}

/// Result type for workout operations.
pub type WorkoutResult<T> = Result<T, WorkoutError>;
