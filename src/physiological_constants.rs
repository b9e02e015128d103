// ABOUTME: Scoring constants for the performance index grounded in exercise physiology
// ABOUTME: MET values, heart rate zones, component weights, windows, and clamp ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Physiological and scoring constants used throughout the index engine.
//!
//! Values are based on established sports-science references where one
//! exists (MET compendium, Fox max-HR formula, ACSM intensity bands); the
//! remaining values are the calibrated scoring parameters of the index
//! formula itself.

/// Metabolic equivalent (MET) values per workout type
///
/// Reference: Ainsworth, B.E. et al. (2011). Compendium of Physical
/// Activities: a second update of codes and MET values.
/// <https://pubmed.ncbi.nlm.nih.gov/21681120/>
pub mod met_values {
    /// Running, general (~6 mph)
    pub const RUNNING: f64 = 11.0;

    /// Cycling, moderate effort
    pub const CYCLING: f64 = 8.0;

    /// Swimming laps, vigorous effort
    pub const SWIMMING: f64 = 10.0;

    /// Resistance training, multiple exercises
    pub const WEIGHTLIFTING: f64 = 6.0;

    /// Boxing, sparring
    pub const BOXING: f64 = 12.0;

    /// Walking, brisk pace
    pub const WALKING: f64 = 3.8;

    /// Hatha yoga
    pub const YOGA: f64 = 2.5;

    /// Fallback for unrecognized workout types
    pub const DEFAULT_MET: f64 = 7.0;
}

/// Adjustment multipliers for calorie-burn targets
///
/// Age brackets reflect the decline of basal metabolic rate with age;
/// the gender multiplier reflects average lean-mass differences.
/// Reference: Mifflin, M.D. et al. (1990). A new predictive equation for
/// resting energy expenditure in healthy individuals.
pub mod calorie_targets {
    /// Upper age bound (exclusive) of the youth bracket
    pub const YOUTH_AGE_LIMIT: u32 = 20;

    /// Target multiplier below [`YOUTH_AGE_LIMIT`]
    pub const YOUTH_MULTIPLIER: f64 = 1.1;

    /// Lower age bound (exclusive) of the masters bracket
    pub const MASTERS_AGE_THRESHOLD: u32 = 50;

    /// Target multiplier above [`MASTERS_AGE_THRESHOLD`]
    pub const MASTERS_MULTIPLIER: f64 = 0.9;

    /// Lower age bound (exclusive) of the senior bracket
    pub const SENIOR_AGE_THRESHOLD: u32 = 65;

    /// Target multiplier above [`SENIOR_AGE_THRESHOLD`]
    pub const SENIOR_MULTIPLIER: f64 = 0.8;

    /// Target multiplier for male subjects
    pub const MALE_MULTIPLIER: f64 = 1.1;
}

/// Defaults substituted for missing subject attributes
pub mod subject_defaults {
    /// Assumed age when none is supplied
    pub const DEFAULT_AGE: u32 = 25;

    /// Assumed body weight (kg) when none is supplied
    pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
}

/// Heart rate estimation parameters
///
/// Max HR uses the Fox formula (220 - age).
/// Reference: Fox, S.M., Naughton, J.P., & Haskell, W.L. (1971). Physical
/// activity and the prevention of coronary heart disease.
pub mod heart_rate {
    /// Base of the age-predicted maximum heart rate formula
    pub const MAX_HR_BASE_BPM: f64 = 220.0;

    /// Typical effort fraction of max HR when running (short sessions)
    pub const RUNNING_BASE_FRACTION: f64 = 0.75;

    /// Additional effort fraction reached by a full-length run
    pub const RUNNING_FRACTION_SPAN: f64 = 0.10;

    /// Run duration (minutes) at which the effort fraction peaks
    pub const RUNNING_FULL_EFFORT_MINUTES: f64 = 60.0;

    /// Typical effort fraction of max HR when cycling
    pub const CYCLING_FRACTION: f64 = 0.70;

    /// Typical effort fraction of max HR when swimming
    pub const SWIMMING_FRACTION: f64 = 0.80;

    /// Typical effort fraction of max HR when weightlifting
    pub const WEIGHTLIFTING_FRACTION: f64 = 0.65;

    /// Typical effort fraction of max HR when boxing
    pub const BOXING_FRACTION: f64 = 0.85;

    /// Typical effort fraction of max HR when walking
    pub const WALKING_FRACTION: f64 = 0.55;

    /// Typical effort fraction of max HR during yoga
    pub const YOGA_FRACTION: f64 = 0.45;

    /// Fallback effort fraction for unrecognized workout types
    pub const DEFAULT_FRACTION: f64 = 0.70;
}

/// Heart-rate-zone scoring bands
///
/// Zone floors are percentages of max HR; bands follow ACSM intensity
/// classifications (light / moderate / vigorous / near-maximal).
/// Reference: ACSM Guidelines for Exercise Testing and Prescription,
/// Table 6.3: Classification of Exercise Intensity.
pub mod intensity_zones {
    /// Floor (% max HR) of the light zone
    pub const LIGHT_ZONE_FLOOR: f64 = 50.0;

    /// Floor (% max HR) of the moderate zone
    pub const MODERATE_ZONE_FLOOR: f64 = 60.0;

    /// Floor (% max HR) of the vigorous zone
    pub const VIGOROUS_ZONE_FLOOR: f64 = 70.0;

    /// Floor (% max HR) of the hard zone
    pub const HARD_ZONE_FLOOR: f64 = 80.0;

    /// Floor (% max HR) of the maximal zone
    pub const MAXIMAL_ZONE_FLOOR: f64 = 90.0;

    /// Zone score below the light floor
    pub const VERY_LIGHT_SCORE: f64 = 10.0;

    /// Zone score for the light zone
    pub const LIGHT_SCORE: f64 = 20.0;

    /// Zone score for the moderate zone
    pub const MODERATE_SCORE: f64 = 40.0;

    /// Zone score for the vigorous zone
    pub const VIGOROUS_SCORE: f64 = 70.0;

    /// Zone score for the hard zone
    pub const HARD_SCORE: f64 = 90.0;

    /// Zone score at or above the maximal floor
    pub const MAXIMAL_SCORE: f64 = 100.0;

    /// Effort threshold (% max HR) for the larger per-workout bonus
    pub const HARD_EFFORT_FLOOR: f64 = 80.0;

    /// Per-workout bonus at or above [`HARD_EFFORT_FLOOR`]
    pub const HARD_EFFORT_BONUS: f64 = 5.0;

    /// Effort threshold (% max HR) for the smaller per-workout bonus
    pub const VIGOROUS_EFFORT_FLOOR: f64 = 75.0;

    /// Per-workout bonus at or above [`VIGOROUS_EFFORT_FLOOR`]
    pub const VIGOROUS_EFFORT_BONUS: f64 = 2.0;

    /// Sampled workouts at or above the vigorous effort floor for the full bonus
    pub const FREQUENT_HARD_SESSIONS: usize = 3;

    /// Aggregate bonus at [`FREQUENT_HARD_SESSIONS`] hard sessions
    pub const FREQUENT_HARD_BONUS: f64 = 8.0;

    /// Sampled workouts at or above the vigorous effort floor for the partial bonus
    pub const OCCASIONAL_HARD_SESSIONS: usize = 2;

    /// Aggregate bonus at [`OCCASIONAL_HARD_SESSIONS`] hard sessions
    pub const OCCASIONAL_HARD_BONUS: f64 = 4.0;

    /// Lower clamp of the intensity component
    pub const INTENSITY_FLOOR: u8 = 25;

    /// Upper clamp of the intensity component
    pub const INTENSITY_CEILING: u8 = 95;

    /// Component score when no sampled workout has a derivable heart rate
    pub const DEFAULT_INTENSITY_SCORE: u8 = 40;
}

/// Consistency component parameters (trailing-month workout frequency)
pub mod consistency {
    /// Trailing window over which workouts are counted (days)
    pub const WINDOW_DAYS: i64 = 30;

    /// Workout count treated as a full month of training
    pub const TARGET_MONTHLY_WORKOUTS: f64 = 25.0;

    /// Scale applied to the count/target ratio
    pub const BASE_SCALE: f64 = 85.0;

    /// Count earning the top step bonus
    pub const HIGH_FREQUENCY_COUNT: usize = 20;

    /// Step bonus at [`HIGH_FREQUENCY_COUNT`]
    pub const HIGH_FREQUENCY_BONUS: f64 = 15.0;

    /// Count earning the middle step bonus
    pub const SOLID_FREQUENCY_COUNT: usize = 15;

    /// Step bonus at [`SOLID_FREQUENCY_COUNT`]
    pub const SOLID_FREQUENCY_BONUS: f64 = 10.0;

    /// Count earning the lowest step bonus
    pub const MODERATE_FREQUENCY_COUNT: usize = 10;

    /// Step bonus at [`MODERATE_FREQUENCY_COUNT`]
    pub const MODERATE_FREQUENCY_BONUS: f64 = 5.0;

    /// Counts below this take the sparse-activity floor path
    pub const SPARSE_COUNT: usize = 3;

    /// Guaranteed minimum for any sparse but nonzero-window activity
    pub const SPARSE_FLOOR: f64 = 15.0;

    /// Scale of the sparse-activity ramp
    pub const SPARSE_SCALE: f64 = 15.0;
}

/// Performance component parameters (actual vs target calorie burn)
pub mod performance {
    /// Most recent workouts sampled for the calorie ratio
    pub const RECENT_SAMPLE_SIZE: usize = 8;

    /// Scale applied to the actual/target ratio
    pub const RATIO_SCALE: f64 = 75.0;

    /// Ratio above which the larger bonus applies
    pub const STRONG_RATIO: f64 = 1.2;

    /// Bonus above [`STRONG_RATIO`]
    pub const STRONG_RATIO_BONUS: f64 = 15.0;

    /// Ratio above which the smaller bonus applies
    pub const ON_TARGET_RATIO: f64 = 1.0;

    /// Bonus above [`ON_TARGET_RATIO`]
    pub const ON_TARGET_BONUS: f64 = 8.0;

    /// All-time workout count earning the experience bonus
    pub const EXPERIENCED_WORKOUT_COUNT: usize = 10;

    /// Experience bonus at [`EXPERIENCED_WORKOUT_COUNT`] workouts
    pub const EXPERIENCE_BONUS: f64 = 5.0;

    /// Neutral score when the target calorie sum is zero
    pub const NEUTRAL_SCORE: u8 = 45;

    /// Lower clamp of the performance component
    pub const PERFORMANCE_FLOOR: u8 = 25;

    /// Upper clamp of the performance component
    pub const PERFORMANCE_CEILING: u8 = 95;
}

/// Variety component parameters (distinct workout types, trailing month)
pub mod variety {
    /// Trailing window over which distinct types are counted (days)
    pub const WINDOW_DAYS: i64 = 30;

    /// Score for a single workout type
    pub const SINGLE_TYPE_SCORE: f64 = 20.0;

    /// Score for exactly two workout types
    pub const TWO_TYPE_SCORE: f64 = 35.0;

    /// Base score at three workout types
    pub const THREE_TYPE_BASE: f64 = 60.0;

    /// Increment per type within the three-to-four band
    pub const THREE_TYPE_STEP: f64 = 15.0;

    /// Base score at five workout types
    pub const FIVE_TYPE_BASE: f64 = 90.0;

    /// Increment per type beyond five
    pub const FIVE_TYPE_STEP: f64 = 2.0;
}

/// Component weights of the aggregate index
///
/// Frequency and output dominate; breadth and effort refine.
/// Reference: Bouchard, C. & Shephard, R.J. (1994). Physical activity,
/// fitness, and health: the multi-component model.
pub mod index_weights {
    /// Weight of the consistency component
    pub const CONSISTENCY_WEIGHT: f64 = 0.35;

    /// Weight of the performance component
    pub const PERFORMANCE_WEIGHT: f64 = 0.35;

    /// Weight of the variety component
    pub const VARIETY_WEIGHT: f64 = 0.15;

    /// Weight of the intensity component
    pub const INTENSITY_WEIGHT: f64 = 0.15;
}

/// Trend classification parameters
pub mod trend {
    /// Snapshot window examined for the short-term trend (days)
    pub const WINDOW_DAYS: i64 = 14;

    /// Minimum snapshots in the window for a non-stable verdict
    pub const MIN_DATA_POINTS: usize = 3;

    /// Mean-score gain above which the trend is improving
    pub const IMPROVEMENT_THRESHOLD: f64 = 5.0;

    /// Mean-score loss below which the trend is declining
    pub const DECLINE_THRESHOLD: f64 = -5.0;
}

/// Snapshot history retention
pub mod history {
    /// Snapshots older than this many days are pruned on write
    pub const MAX_HISTORY_DAYS: i64 = 90;
}

/// Streak detection parameters
pub mod streaks {
    /// Days a streak survives without a workout before it breaks
    pub const CURRENT_STREAK_GRACE_DAYS: i64 = 1;

    /// Minimum current streak length worth surfacing as an insight
    pub const MIN_STREAK_FOR_INSIGHT: u32 = 3;
}
