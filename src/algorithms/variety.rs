// ABOUTME: Variety component counting distinct workout types over the trailing month
// ABOUTME: Banded scoring that rewards cross-training breadth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Variety score: breadth of training across workout types.
#![allow(clippy::cast_precision_loss)] // Safe: type counts are small

use super::clamp_component;
use crate::models::WorkoutRecord;
use crate::physiological_constants::variety::{
    FIVE_TYPE_BASE, FIVE_TYPE_STEP, SINGLE_TYPE_SCORE, THREE_TYPE_BASE, THREE_TYPE_STEP,
    TWO_TYPE_SCORE, WINDOW_DAYS,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// Score the number of distinct workout types in the trailing 30 days
///
/// Types are grouped case-insensitively; "Running" and "running" are one
/// type.
#[must_use]
pub fn variety_score(workouts: &[WorkoutRecord], now: DateTime<Utc>) -> u8 {
    let cutoff = now - Duration::days(WINDOW_DAYS);
    let unique: HashSet<String> = workouts
        .iter()
        .filter(|w| w.timestamp >= cutoff)
        .map(|w| w.workout_type.to_lowercase())
        .collect();

    let raw = match unique.len() {
        0 => 0.0,
        1 => SINGLE_TYPE_SCORE,
        2 => TWO_TYPE_SCORE,
        n @ 3..=4 => (n - 3) as f64 * THREE_TYPE_STEP + THREE_TYPE_BASE,
        n => (n - 5) as f64 * FIVE_TYPE_STEP + FIVE_TYPE_BASE,
    };

    clamp_component(raw, 0, 100)
}
