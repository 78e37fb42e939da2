//! Per-workout formula constants.

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Running calorie coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningFormula {
    /// Step length in meters
    pub step_length_m: f64,
    /// Multiplier applied to mean speed
    pub speed_multiplier: f64,
    /// Offset subtracted from the scaled speed
    pub speed_shift: f64,
}

/// Race walking calorie coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceWalkingFormula {
    /// Step length in meters
    pub step_length_m: f64,
    /// Weight coefficient of the base term
    pub weight_multiplier: f64,
    /// Exponent applied to mean speed
    pub speed_exponent: i32,
    /// Weight coefficient of the speed/height term
    pub speed_height_multiplier: f64,
}

/// Swimming calorie coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingFormula {
    /// Stroke length in meters
    pub stroke_length_m: f64,
    /// Offset added to mean speed
    pub speed_shift: f64,
    /// Multiplier applied to the shifted speed
    pub speed_multiplier: f64,
}

pub const RUNNING: RunningFormula = RunningFormula {
    step_length_m: 0.65,
    speed_multiplier: 18.0,
    speed_shift: 20.0,
};

pub const RACE_WALKING: RaceWalkingFormula = RaceWalkingFormula {
    step_length_m: 0.65,
    weight_multiplier: 0.035,
    speed_exponent: 2,
    speed_height_multiplier: 0.029,
};

pub const SWIMMING: SwimmingFormula = SwimmingFormula {
    stroke_length_m: 1.38,
    speed_shift: 1.1,
    speed_multiplier: 2.0,
};
