// ABOUTME: Typed workout, subject, and snapshot models for the index engine
// ABOUTME: One canonical name per attribute; optional fields are explicit Options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Data model of the scoring engine.
//!
//! Workout records are read-only input owned by the caller; snapshots are
//! the engine's output and the unit stored in history. Field-name
//! normalization from upstream payloads happens before records reach this
//! crate, so every attribute has exactly one name here.

use crate::physiological_constants::index_weights::{
    CONSISTENCY_WEIGHT, INTENSITY_WEIGHT, PERFORMANCE_WEIGHT, VARIETY_WEIGHT,
};
use crate::trend::TrendDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject gender, used only for calorie-target estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male subjects carry a higher calorie-target multiplier
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// One completed exercise session
///
/// Created by the caller when a workout completes and immutable afterwards.
/// The optional subject attributes are per-record overrides; a
/// [`SubjectContext`] supplies fallbacks for a whole scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// When the workout occurred
    pub timestamp: DateTime<Utc>,

    /// Free-form category label ("running", "cycling", ...); grouped
    /// case-insensitively
    pub workout_type: String,

    /// Session length in minutes
    pub duration_minutes: f64,

    /// Calories burned; absent counts as zero in aggregation
    #[serde(default)]
    pub calories_burned: Option<f64>,

    /// Average heart rate (bpm) if measured
    #[serde(default)]
    pub heart_rate_avg: Option<u32>,

    /// Subject age at workout time
    #[serde(default)]
    pub age: Option<u32>,

    /// Subject body weight (kg)
    #[serde(default)]
    pub weight_kg: Option<f64>,

    /// Subject gender
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl WorkoutRecord {
    /// Age for this workout: the record's own value, else the context's
    #[must_use]
    pub fn age_with(&self, context: Option<&SubjectContext>) -> Option<u32> {
        self.age.or_else(|| context.and_then(|c| c.age))
    }

    /// Body weight for this workout: the record's own value, else the context's
    #[must_use]
    pub fn weight_with(&self, context: Option<&SubjectContext>) -> Option<f64> {
        self.weight_kg.or_else(|| context.and_then(|c| c.weight_kg))
    }

    /// Gender for this workout: the record's own value, else the context's
    #[must_use]
    pub fn gender_with(&self, context: Option<&SubjectContext>) -> Option<Gender> {
        self.gender.or_else(|| context.and_then(|c| c.gender))
    }
}

/// Subject attributes supplied once per scoring run
///
/// Fallback source for the per-record subject fields; anything still
/// missing takes the documented defaults (age 25, weight 70 kg, male).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SubjectContext {
    /// Subject age in years
    #[serde(default)]
    pub age: Option<u32>,

    /// Subject body weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,

    /// Subject gender
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// The four component scores of an index snapshot, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Workout frequency over the trailing month
    pub consistency: u8,

    /// Actual vs target calorie burn over recent workouts
    pub performance: u8,

    /// Distinct workout types over the trailing month
    pub variety: u8,

    /// Heart-rate-zone distribution over recent workouts
    pub intensity: u8,
}

impl ComponentScores {
    /// Weighted aggregate of the four components, rounded and clamped to [0, 100]
    #[must_use]
    pub fn weighted_total(&self) -> u8 {
        let total = f64::from(self.consistency).mul_add(
            CONSISTENCY_WEIGHT,
            f64::from(self.performance).mul_add(
                PERFORMANCE_WEIGHT,
                f64::from(self.variety).mul_add(
                    VARIETY_WEIGHT,
                    f64::from(self.intensity) * INTENSITY_WEIGHT,
                ),
            ),
        );
        total.round().clamp(0.0, 100.0) as u8
    }

    /// Name and value of the lowest-scoring component
    #[must_use]
    pub fn weakest(&self) -> (&'static str, u8) {
        let candidates = [
            ("consistency", self.consistency),
            ("performance", self.performance),
            ("variety", self.variety),
            ("intensity", self.intensity),
        ];
        // min_by_key keeps the first of equals, so ties resolve in the
        // declared component order
        candidates
            .into_iter()
            .min_by_key(|(_, value)| *value)
            .unwrap_or(("consistency", self.consistency))
    }
}

/// Performance tier classification of an index score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    /// 0-14
    NewUser,
    /// 15-29
    GettingStarted,
    /// 30-44
    Beginner,
    /// 45-59
    Developing,
    /// 60-74
    Intermediate,
    /// 75-89
    Advanced,
    /// 90-100
    EliteAthlete,
}

impl PerformanceLevel {
    /// Classify a 0-100 index score; both band bounds are inclusive
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::EliteAthlete,
            75..=89 => Self::Advanced,
            60..=74 => Self::Intermediate,
            45..=59 => Self::Developing,
            30..=44 => Self::Beginner,
            15..=29 => Self::GettingStarted,
            0..=14 => Self::NewUser,
        }
    }

    /// Human-readable tier name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::EliteAthlete => "Elite Athlete",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Developing => "Developing",
            Self::Beginner => "Beginner",
            Self::GettingStarted => "Getting Started",
            Self::NewUser => "New User",
        }
    }
}

/// One computed performance index at a point in time
///
/// `score` always equals the rounded weighted aggregate of `components`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSnapshot {
    /// Weighted aggregate index, 0-100
    pub score: u8,

    /// Performance tier of `score`
    pub level: PerformanceLevel,

    /// The four component scores
    pub components: ComponentScores,

    /// Short-term direction derived from recent snapshot history
    pub trend: TrendDirection,

    /// When this snapshot was computed
    pub timestamp: DateTime<Utc>,

    /// Workouts considered as of this snapshot
    pub workout_count: u32,
}

impl IndexSnapshot {
    /// The zero-state snapshot for an empty or fully invalid workout history
    ///
    /// Deliberately labeled "Getting Started" rather than the zero-score
    /// band: the empty state is an onboarding state, not a measurement.
    #[must_use]
    pub fn new_user(timestamp: DateTime<Utc>) -> Self {
        Self {
            score: 0,
            level: PerformanceLevel::GettingStarted,
            components: ComponentScores::default(),
            trend: TrendDirection::Stable,
            timestamp,
            workout_count: 0,
        }
    }
}
