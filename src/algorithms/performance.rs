// ABOUTME: Performance component comparing actual to target calorie burn
// ABOUTME: MET-based per-workout targets with age and gender adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Performance score: calorie output against a personalized target.

use super::clamp_component;
use crate::models::{Gender, SubjectContext, WorkoutRecord};
use crate::physiological_constants::calorie_targets::{
    MALE_MULTIPLIER, MASTERS_AGE_THRESHOLD, MASTERS_MULTIPLIER, SENIOR_AGE_THRESHOLD,
    SENIOR_MULTIPLIER, YOUTH_AGE_LIMIT, YOUTH_MULTIPLIER,
};
use crate::physiological_constants::met_values;
use crate::physiological_constants::performance::{
    EXPERIENCED_WORKOUT_COUNT, EXPERIENCE_BONUS, NEUTRAL_SCORE, ON_TARGET_BONUS, ON_TARGET_RATIO,
    PERFORMANCE_CEILING, PERFORMANCE_FLOOR, RATIO_SCALE, RECENT_SAMPLE_SIZE, STRONG_RATIO,
    STRONG_RATIO_BONUS,
};
use crate::physiological_constants::subject_defaults::{DEFAULT_AGE, DEFAULT_WEIGHT_KG};

/// MET value for a workout type, matched case-insensitively
fn met_for(workout_type: &str) -> f64 {
    match workout_type.to_lowercase().as_str() {
        "running" => met_values::RUNNING,
        "cycling" => met_values::CYCLING,
        "swimming" => met_values::SWIMMING,
        "weightlifting" => met_values::WEIGHTLIFTING,
        "boxing" => met_values::BOXING,
        "walking" => met_values::WALKING,
        "yoga" => met_values::YOGA,
        _ => met_values::DEFAULT_MET,
    }
}

/// Age-bracket multiplier for the calorie target
fn age_multiplier(age: u32) -> f64 {
    if age > SENIOR_AGE_THRESHOLD {
        SENIOR_MULTIPLIER
    } else if age > MASTERS_AGE_THRESHOLD {
        MASTERS_MULTIPLIER
    } else if age < YOUTH_AGE_LIMIT {
        YOUTH_MULTIPLIER
    } else {
        1.0
    }
}

/// Expected calorie burn for one workout given the resolved subject
fn target_calories(record: &WorkoutRecord, context: Option<&SubjectContext>) -> f64 {
    let age = record.age_with(context).unwrap_or(DEFAULT_AGE);
    let weight_kg = record.weight_with(context).unwrap_or(DEFAULT_WEIGHT_KG);
    let gender = record.gender_with(context).unwrap_or(Gender::Male);

    let gender_multiplier = if gender == Gender::Male {
        MALE_MULTIPLIER
    } else {
        1.0
    };

    met_for(&record.workout_type)
        * weight_kg
        * (record.duration_minutes / 60.0)
        * age_multiplier(age)
        * gender_multiplier
}

/// Score recent calorie output against personalized targets
///
/// Compares the summed actual burn of the most recent workouts against the
/// summed MET-based target. A zero target sum (for example all-zero
/// durations) short-circuits to the neutral score instead of dividing.
#[must_use]
pub fn performance_score(workouts: &[WorkoutRecord], context: Option<&SubjectContext>) -> u8 {
    let sample_start = workouts.len().saturating_sub(RECENT_SAMPLE_SIZE);
    let recent = &workouts[sample_start..];
    if recent.is_empty() {
        return NEUTRAL_SCORE;
    }

    let actual: f64 = recent
        .iter()
        .map(|w| w.calories_burned.unwrap_or(0.0))
        .sum();
    let target: f64 = recent.iter().map(|w| target_calories(w, context)).sum();

    if target <= 0.0 {
        return NEUTRAL_SCORE;
    }

    let ratio = actual / target;
    let ratio_bonus = if ratio > STRONG_RATIO {
        STRONG_RATIO_BONUS
    } else if ratio > ON_TARGET_RATIO {
        ON_TARGET_BONUS
    } else {
        0.0
    };
    let experience_bonus = if workouts.len() >= EXPERIENCED_WORKOUT_COUNT {
        EXPERIENCE_BONUS
    } else {
        0.0
    };

    clamp_component(
        ratio.mul_add(RATIO_SCALE, ratio_bonus + experience_bonus),
        PERFORMANCE_FLOOR,
        PERFORMANCE_CEILING,
    )
}
