// ABOUTME: Workout-day streak detection over a user's workout history
// ABOUTME: Current streak, longest streak, and distinct active days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Streak detection.
//!
//! A streak is a run of consecutive calendar days each containing at least
//! one workout; several workouts on one day count once. The current streak
//! survives a day without a workout only within the grace period (today or
//! yesterday anchors it).

use crate::models::WorkoutRecord;
use crate::physiological_constants::streaks::CURRENT_STREAK_GRACE_DAYS;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Workout-day streak summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Length of the streak ending today or yesterday, in days
    pub current_streak_days: u32,
    /// Longest streak anywhere in the history, in days
    pub longest_streak_days: u32,
    /// Distinct calendar days with at least one workout
    pub active_days: u32,
}

/// Stateless streak detector
pub struct StreakDetector;

impl StreakDetector {
    /// Detect workout-day streaks in a history
    #[must_use]
    pub fn detect(workouts: &[WorkoutRecord], now: DateTime<Utc>) -> StreakSummary {
        let days: BTreeSet<NaiveDate> = workouts
            .iter()
            .map(|w| w.timestamp.date_naive())
            .collect();

        if days.is_empty() {
            return StreakSummary::default();
        }

        let longest = Self::longest_run(&days);
        let current = Self::current_run(&days, now.date_naive());

        StreakSummary {
            current_streak_days: current,
            longest_streak_days: longest,
            active_days: days.len() as u32,
        }
    }

    /// Longest run of consecutive days anywhere in the set
    fn longest_run(days: &BTreeSet<NaiveDate>) -> u32 {
        let mut longest = 0u32;
        let mut run = 0u32;
        let mut previous: Option<NaiveDate> = None;

        for day in days {
            run = match previous {
                Some(prev) if *day - prev == Duration::days(1) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(*day);
        }

        longest
    }

    /// Run of consecutive days ending inside the grace window
    fn current_run(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
        // Anchor on the most recent active day if it is within the grace
        // window, then walk backwards
        let anchor = (0..=CURRENT_STREAK_GRACE_DAYS)
            .map(|offset| today - Duration::days(offset))
            .find(|candidate| days.contains(candidate));

        let Some(mut cursor) = anchor else {
            return 0;
        };

        let mut run = 1u32;
        while days.contains(&(cursor - Duration::days(1))) {
            cursor = cursor - Duration::days(1);
            run += 1;
        }
        run
    }
}
