//! Workout summary record and its message text.

use serde::{Deserialize, Serialize};

/// Language of the rendered summary message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLocale {
    /// English (default)
    #[default]
    En,
    /// Russian
    Ru,
}

impl MessageLocale {
    /// Fixed message printed for a package that could not be processed.
    pub fn failure_message(&self) -> &'static str {
        match self {
            MessageLocale::En => "No such workout.",
            MessageLocale::Ru => "Такой тренировки нет.",
        }
    }
}

impl std::fmt::Display for MessageLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageLocale::En => write!(f, "en"),
            MessageLocale::Ru => write!(f, "ru"),
        }
    }
}

/// Metrics computed for a single workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout display name
    pub workout_type: String,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub avg_speed_kmh: f64,
    /// Calories spent in kcal
    pub calories_kcal: f64,
}

impl WorkoutSummary {
    /// Render the summary message in the given locale.
    ///
    /// Every numeric field is printed with exactly three decimals.
    pub fn message(&self, locale: MessageLocale) -> String {
        match locale {
            MessageLocale::En => format!(
                "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories spent: {:.3}.",
                self.workout_type,
                self.duration_hours,
                self.distance_km,
                self.avg_speed_kmh,
                self.calories_kcal,
            ),
            MessageLocale::Ru => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.workout_type,
                self.duration_hours,
                self.distance_km,
                self.avg_speed_kmh,
                self.calories_kcal,
            ),
        }
    }
}

impl std::fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message(MessageLocale::En))
    }
}
