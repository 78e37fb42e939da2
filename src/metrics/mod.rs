//! Metrics module for workout distance, speed and calorie calculations.

pub mod calculator;
pub mod formulas;

pub use calculator::{
    average_speed, calories, distance, reading_distance, step_length, summarize,
};
