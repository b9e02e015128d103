// ABOUTME: Workout history provider seam and in-memory workout log
// ABOUTME: Read-only source of per-user workout records for the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Workout history provider seam.
//!
//! The application that records workouts owns their storage; the engine
//! only reads. [`InMemoryWorkoutLog`] is the bundled implementation for
//! tests and embedded callers.

use crate::models::WorkoutRecord;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Read-only source of a user's workout records
pub trait WorkoutHistoryProvider: Send + Sync {
    /// The user's workout records, ordered oldest to newest
    fn workout_history(&self, user_id: Uuid) -> Vec<WorkoutRecord>;
}

impl<P: WorkoutHistoryProvider + ?Sized> WorkoutHistoryProvider for Arc<P> {
    fn workout_history(&self, user_id: Uuid) -> Vec<WorkoutRecord> {
        (**self).workout_history(user_id)
    }
}

/// In-memory workout log keyed by user id
#[derive(Debug, Default)]
pub struct InMemoryWorkoutLog {
    records: RwLock<HashMap<Uuid, Vec<WorkoutRecord>>>,
}

impl InMemoryWorkoutLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed workout for a user
    ///
    /// If the lock is poisoned, the record is silently dropped.
    pub fn log_workout(&self, user_id: Uuid, record: WorkoutRecord) {
        let Ok(mut records) = self.records.write() else {
            return;
        };
        let history = records.entry(user_id).or_default();
        history.push(record);
        history.sort_by_key(|r| r.timestamp);
    }
}

impl WorkoutHistoryProvider for InMemoryWorkoutLog {
    /// Returns empty if the lock is poisoned.
    fn workout_history(&self, user_id: Uuid) -> Vec<WorkoutRecord> {
        let Ok(records) = self.records.read() else {
            return Vec::new();
        };
        records.get(&user_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn record(offset_days: i64) -> WorkoutRecord {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).single().unwrap();
        WorkoutRecord {
            timestamp: base + Duration::days(offset_days),
            workout_type: "running".into(),
            duration_minutes: 30.0,
            calories_burned: Some(300.0),
            heart_rate_avg: None,
            age: None,
            weight_kg: None,
            gender: None,
        }
    }

    #[test]
    fn log_returns_records_in_chronological_order() {
        let log = InMemoryWorkoutLog::new();
        let user = Uuid::new_v4();
        log.log_workout(user, record(5));
        log.log_workout(user, record(1));
        log.log_workout(user, record(3));

        let history = log.workout_history(user);
        assert_eq!(history.len(), 3);
        assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn unknown_user_has_empty_history() {
        let log = InMemoryWorkoutLog::new();
        assert!(log.workout_history(Uuid::new_v4()).is_empty());
    }
}
