// ABOUTME: Sub-score calculators for the four performance index components
// ABOUTME: Consistency, performance, variety, and intensity over workout history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Component score calculators.
//!
//! Each calculator consumes the sanitized, chronologically ordered workout
//! history (plus the optional subject context where calorie or heart-rate
//! estimation is involved) and returns an integer score inside its
//! documented clamp range.

/// Workout frequency over the trailing month
pub mod consistency;
/// Heart-rate-zone distribution over recent workouts
pub mod intensity;
/// Actual vs target calorie burn over recent workouts
pub mod performance;
/// Distinct workout types over the trailing month
pub mod variety;

pub use consistency::consistency_score;
pub use intensity::intensity_score;
pub use performance::performance_score;
pub use variety::variety_score;

/// Round and clamp a raw component value into its score range
pub(crate) fn clamp_component(value: f64, floor: u8, ceiling: u8) -> u8 {
    let rounded = value.round();
    if !rounded.is_finite() {
        return floor;
    }
    (rounded.clamp(f64::from(floor), f64::from(ceiling))) as u8
}
