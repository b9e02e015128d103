// ABOUTME: Consistency component measuring workout frequency over the trailing month
// ABOUTME: Count-based ramp with step bonuses and a sparse-activity floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Consistency score: how regularly the user trains.
#![allow(clippy::cast_precision_loss)] // Safe: workout counts are small

use super::clamp_component;
use crate::models::WorkoutRecord;
use crate::physiological_constants::consistency::{
    BASE_SCALE, HIGH_FREQUENCY_BONUS, HIGH_FREQUENCY_COUNT, MODERATE_FREQUENCY_BONUS,
    MODERATE_FREQUENCY_COUNT, SOLID_FREQUENCY_BONUS, SOLID_FREQUENCY_COUNT, SPARSE_COUNT,
    SPARSE_FLOOR, SPARSE_SCALE, TARGET_MONTHLY_WORKOUTS, WINDOW_DAYS,
};
use chrono::{DateTime, Duration, Utc};

/// Score workout frequency over the trailing 30 days
///
/// Near-daily training is rewarded without demanding a workout every single
/// day; sparse activity takes a guaranteed floor so brand-new users never
/// see a zero.
#[must_use]
pub fn consistency_score(workouts: &[WorkoutRecord], now: DateTime<Utc>) -> u8 {
    let cutoff = now - Duration::days(WINDOW_DAYS);
    let count = workouts.iter().filter(|w| w.timestamp >= cutoff).count();

    if count < SPARSE_COUNT {
        let ramp = (count as f64 / SPARSE_COUNT as f64) * SPARSE_SCALE;
        return clamp_component(ramp.max(SPARSE_FLOOR), 0, 100);
    }

    let base = (count as f64 / TARGET_MONTHLY_WORKOUTS) * BASE_SCALE;
    let bonus = if count >= HIGH_FREQUENCY_COUNT {
        HIGH_FREQUENCY_BONUS
    } else if count >= SOLID_FREQUENCY_COUNT {
        SOLID_FREQUENCY_BONUS
    } else if count >= MODERATE_FREQUENCY_COUNT {
        MODERATE_FREQUENCY_BONUS
    } else {
        0.0
    };

    clamp_component(base + bonus, 0, 100)
}
