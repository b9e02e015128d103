// ABOUTME: Intensity component from heart-rate-zone distribution of recent workouts
// ABOUTME: Measured heart rate preferred, age-based estimation as fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Intensity score: how hard recent sessions were, by heart-rate zone.
#![allow(clippy::cast_precision_loss)] // Safe: sample sizes are small

use super::clamp_component;
use crate::models::{SubjectContext, WorkoutRecord};
use crate::physiological_constants::heart_rate::{
    BOXING_FRACTION, CYCLING_FRACTION, DEFAULT_FRACTION, MAX_HR_BASE_BPM, RUNNING_BASE_FRACTION,
    RUNNING_FRACTION_SPAN, RUNNING_FULL_EFFORT_MINUTES, SWIMMING_FRACTION, WALKING_FRACTION,
    WEIGHTLIFTING_FRACTION, YOGA_FRACTION,
};
use crate::physiological_constants::intensity_zones::{
    DEFAULT_INTENSITY_SCORE, FREQUENT_HARD_BONUS, FREQUENT_HARD_SESSIONS, HARD_EFFORT_BONUS,
    HARD_EFFORT_FLOOR, HARD_SCORE, HARD_ZONE_FLOOR, INTENSITY_CEILING, INTENSITY_FLOOR,
    LIGHT_SCORE, LIGHT_ZONE_FLOOR, MAXIMAL_SCORE, MAXIMAL_ZONE_FLOOR, MODERATE_SCORE,
    MODERATE_ZONE_FLOOR, OCCASIONAL_HARD_BONUS, OCCASIONAL_HARD_SESSIONS, VERY_LIGHT_SCORE,
    VIGOROUS_EFFORT_BONUS, VIGOROUS_EFFORT_FLOOR, VIGOROUS_SCORE, VIGOROUS_ZONE_FLOOR,
};
use crate::physiological_constants::performance::RECENT_SAMPLE_SIZE;
use crate::physiological_constants::subject_defaults::DEFAULT_AGE;

/// Typical effort fraction of max HR for a workout type
///
/// Running ramps from its base toward a ceiling as sessions approach a full
/// hour; other activities use fixed fractions.
fn effort_fraction(workout_type: &str, duration_minutes: f64) -> f64 {
    match workout_type.to_lowercase().as_str() {
        "running" => {
            let ramp = (duration_minutes / RUNNING_FULL_EFFORT_MINUTES).clamp(0.0, 1.0);
            RUNNING_FRACTION_SPAN.mul_add(ramp, RUNNING_BASE_FRACTION)
        }
        "cycling" => CYCLING_FRACTION,
        "swimming" => SWIMMING_FRACTION,
        "weightlifting" => WEIGHTLIFTING_FRACTION,
        "boxing" => BOXING_FRACTION,
        "walking" => WALKING_FRACTION,
        "yoga" => YOGA_FRACTION,
        _ => DEFAULT_FRACTION,
    }
}

/// Heart rate as a percentage of max HR for one workout, when derivable
///
/// A measured average heart rate is normalized against the age-predicted
/// max (defaulting the age when unknown). Without a measurement, an age
/// from the record or context permits estimation from the activity's
/// typical effort fraction; a fully anonymous record yields `None`.
fn hr_percentage(record: &WorkoutRecord, context: Option<&SubjectContext>) -> Option<f64> {
    let known_age = record.age_with(context);

    if let Some(measured) = record.heart_rate_avg {
        let max_hr = MAX_HR_BASE_BPM - f64::from(known_age.unwrap_or(DEFAULT_AGE));
        return Some(f64::from(measured) / max_hr * 100.0);
    }

    known_age.map(|_| effort_fraction(&record.workout_type, record.duration_minutes) * 100.0)
}

/// Zone score for one workout from its percentage of max HR
fn zone_score(hr_pct: f64) -> f64 {
    let base = if hr_pct >= MAXIMAL_ZONE_FLOOR {
        MAXIMAL_SCORE
    } else if hr_pct >= HARD_ZONE_FLOOR {
        HARD_SCORE
    } else if hr_pct >= VIGOROUS_ZONE_FLOOR {
        VIGOROUS_SCORE
    } else if hr_pct >= MODERATE_ZONE_FLOOR {
        MODERATE_SCORE
    } else if hr_pct >= LIGHT_ZONE_FLOOR {
        LIGHT_SCORE
    } else {
        VERY_LIGHT_SCORE
    };

    // One effort bonus per workout, the larger tier winning
    let bonus = if hr_pct >= HARD_EFFORT_FLOOR {
        HARD_EFFORT_BONUS
    } else if hr_pct >= VIGOROUS_EFFORT_FLOOR {
        VIGOROUS_EFFORT_BONUS
    } else {
        0.0
    };

    base + bonus
}

/// Score the heart-rate-zone distribution of the most recent workouts
#[must_use]
pub fn intensity_score(workouts: &[WorkoutRecord], context: Option<&SubjectContext>) -> u8 {
    let sample_start = workouts.len().saturating_sub(RECENT_SAMPLE_SIZE);
    let percentages: Vec<f64> = workouts[sample_start..]
        .iter()
        .filter_map(|w| hr_percentage(w, context))
        .collect();

    if percentages.is_empty() {
        return DEFAULT_INTENSITY_SCORE;
    }

    let mean = percentages.iter().copied().map(zone_score).sum::<f64>() / percentages.len() as f64;

    let hard_sessions = percentages
        .iter()
        .filter(|pct| **pct >= VIGOROUS_EFFORT_FLOOR)
        .count();
    let frequency_bonus = if hard_sessions >= FREQUENT_HARD_SESSIONS {
        FREQUENT_HARD_BONUS
    } else if hard_sessions >= OCCASIONAL_HARD_SESSIONS {
        OCCASIONAL_HARD_BONUS
    } else {
        0.0
    };

    clamp_component(mean + frequency_bonus, INTENSITY_FLOOR, INTENSITY_CEILING)
}
