// ABOUTME: The scoring engine composing sub-scores, trend, and history policy
// ABOUTME: Pure scoring split from persistence, with injected collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! The scoring engine.
//!
//! [`ScoringEngine`] is constructed with an injected workout provider and
//! snapshot store so callers (and tests) control both sides of the data
//! flow. Scoring is split into a pure half ([`ScoringEngine::score`]) and a
//! persistence half ([`ScoringEngine::record`]); [`ScoringEngine::compute_index`]
//! composes the two for the common recompute-after-save path.

use crate::algorithms::{consistency_score, intensity_score, performance_score, variety_score};
use crate::config::ScoringConfig;
use crate::errors::ConfigError;
use crate::history::{dedupe_daily, prune_expired, HistoryStore};
use crate::models::{
    ComponentScores, IndexSnapshot, PerformanceLevel, SubjectContext, WorkoutRecord,
};
use crate::pattern_detection::{StreakDetector, StreakSummary};
use crate::providers::WorkoutHistoryProvider;
use crate::trend::{classify_score_delta, classify_snapshot_trend, PeriodComparison};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

/// Performance index scoring engine
///
/// Synchronous and stateless apart from its collaborators; a shared
/// instance can serve concurrent callers because writes funnel through the
/// store, where day-level dedupe makes last-write-wins safe.
pub struct ScoringEngine<P, S> {
    provider: P,
    store: S,
    config: ScoringConfig,
}

impl<P: WorkoutHistoryProvider, S: HistoryStore> ScoringEngine<P, S> {
    /// Create an engine with the default configuration
    pub fn new(provider: P, store: S) -> Self {
        Self {
            provider,
            store,
            config: ScoringConfig::default(),
        }
    }

    /// Create an engine with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn with_config(provider: P, store: S, config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            provider,
            store,
            config,
        })
    }

    /// Compute a snapshot without persisting it (preview scoring)
    ///
    /// Reads the snapshot store only to classify the short-term trend.
    #[must_use]
    pub fn score(
        &self,
        user_id: Uuid,
        workouts: &[WorkoutRecord],
        context: Option<&SubjectContext>,
    ) -> IndexSnapshot {
        self.score_at(user_id, workouts, context, Utc::now())
    }

    /// Compute a snapshot as of a given instant without persisting it
    ///
    /// The explicit clock makes recomputation reproducible; all recency
    /// windows are measured from `now`.
    #[must_use]
    pub fn score_at(
        &self,
        user_id: Uuid,
        workouts: &[WorkoutRecord],
        context: Option<&SubjectContext>,
        now: DateTime<Utc>,
    ) -> IndexSnapshot {
        let history = sanitize(workouts);
        if history.is_empty() {
            debug!(%user_id, "no scoreable workouts, returning zero-state snapshot");
            return IndexSnapshot::new_user(now);
        }

        let components = ComponentScores {
            consistency: consistency_score(&history, now),
            performance: performance_score(&history, context),
            variety: variety_score(&history, now),
            intensity: intensity_score(&history, context),
        };
        let score = components.weighted_total();

        let window_cutoff = now - Duration::days(self.config.trend.window_days);
        let recent_snapshots = self.store.read_window(user_id, window_cutoff);
        let trend = classify_snapshot_trend(&recent_snapshots, now, &self.config.trend);

        debug!(%user_id, score, workout_count = history.len(), "computed performance index");

        IndexSnapshot {
            score,
            level: PerformanceLevel::from_score(score),
            components,
            trend,
            timestamp: now,
            workout_count: history.len() as u32,
        }
    }

    /// Persist a snapshot: append, collapse to one entry per day, prune
    pub fn record(&self, user_id: Uuid, snapshot: IndexSnapshot) {
        self.record_at(user_id, snapshot, Utc::now());
    }

    fn record_at(&self, user_id: Uuid, snapshot: IndexSnapshot, now: DateTime<Utc>) {
        let mut snapshots = self.store.read_all(user_id);
        snapshots.push(snapshot);
        let deduped = dedupe_daily(snapshots);
        let retained = prune_expired(deduped, now, self.config.history.max_history_days);
        self.store.overwrite(user_id, retained);
    }

    /// Compute a snapshot from the given workout history and persist it
    pub fn compute_index(
        &self,
        user_id: Uuid,
        workouts: &[WorkoutRecord],
        context: Option<&SubjectContext>,
    ) -> IndexSnapshot {
        self.compute_index_at(user_id, workouts, context, Utc::now())
    }

    /// Compute and persist a snapshot as of a given instant
    pub fn compute_index_at(
        &self,
        user_id: Uuid,
        workouts: &[WorkoutRecord],
        context: Option<&SubjectContext>,
        now: DateTime<Utc>,
    ) -> IndexSnapshot {
        let snapshot = self.score_at(user_id, workouts, context, now);
        self.record_at(user_id, snapshot.clone(), now);
        snapshot
    }

    /// Pull the user's workout history from the provider, then compute and
    /// persist a snapshot
    pub fn refresh_index(
        &self,
        user_id: Uuid,
        context: Option<&SubjectContext>,
    ) -> IndexSnapshot {
        let workouts = self.provider.workout_history(user_id);
        self.compute_index(user_id, &workouts, context)
    }

    /// Snapshot history within a lookback window, ordered oldest to newest
    #[must_use]
    pub fn get_history(&self, user_id: Uuid, days: i64) -> Vec<IndexSnapshot> {
        self.get_history_at(user_id, days, Utc::now())
    }

    fn get_history_at(&self, user_id: Uuid, days: i64, now: DateTime<Utc>) -> Vec<IndexSnapshot> {
        let mut snapshots = self.store.read_window(user_id, now - Duration::days(days));
        snapshots.sort_by_key(|s| s.timestamp);
        snapshots
    }

    /// Compare the latest snapshot against the last one before the window
    ///
    /// Returns `None` when the user has fewer than two snapshots or none
    /// precedes the cutoff.
    #[must_use]
    pub fn compare_with_previous(&self, user_id: Uuid, days: i64) -> Option<PeriodComparison> {
        self.compare_with_previous_at(user_id, days, Utc::now())
    }

    fn compare_with_previous_at(
        &self,
        user_id: Uuid,
        days: i64,
        now: DateTime<Utc>,
    ) -> Option<PeriodComparison> {
        let mut snapshots = self.store.read_all(user_id);
        if snapshots.len() < 2 {
            return None;
        }
        snapshots.sort_by_key(|s| s.timestamp);

        let current = snapshots.last()?.clone();
        let cutoff = now - Duration::days(days);
        let previous = snapshots.iter().rfind(|s| s.timestamp < cutoff)?.clone();

        let difference = i32::from(current.score) - i32::from(previous.score);
        let percent_change = if previous.score == 0 {
            0.0
        } else {
            f64::from(difference) / f64::from(previous.score) * 100.0
        };
        let trend = classify_score_delta(f64::from(difference), &self.config.trend);

        Some(PeriodComparison {
            current,
            previous,
            difference,
            percent_change,
            trend,
        })
    }

    /// Workout-day streaks for a history
    #[must_use]
    pub fn workout_streaks(&self, workouts: &[WorkoutRecord]) -> StreakSummary {
        StreakDetector::detect(&sanitize(workouts), Utc::now())
    }
}

/// Drop unscoreable records and order the rest chronologically
///
/// Only structurally broken values are dropped (non-finite or negative
/// durations); a zero duration is tolerated and flows into the calorie
/// target's neutral path. Broken calorie values degrade to absent rather
/// than discarding the whole record.
fn sanitize(workouts: &[WorkoutRecord]) -> Vec<WorkoutRecord> {
    let mut valid: Vec<WorkoutRecord> = Vec::with_capacity(workouts.len());
    let mut dropped = 0usize;

    for record in workouts {
        if !record.duration_minutes.is_finite() || record.duration_minutes < 0.0 {
            dropped += 1;
            continue;
        }
        let mut record = record.clone();
        if record
            .calories_burned
            .is_some_and(|c| !c.is_finite() || c < 0.0)
        {
            record.calories_burned = None;
        }
        valid.push(record);
    }

    if dropped > 0 {
        warn!(dropped, "ignoring workout records with invalid durations");
    }

    valid.sort_by_key(|r| r.timestamp);
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::InMemoryHistoryStore;
    use crate::providers::InMemoryWorkoutLog;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().unwrap()
    }

    fn workout(days_ago: i64) -> WorkoutRecord {
        WorkoutRecord {
            timestamp: fixed_now() - Duration::days(days_ago),
            workout_type: "running".into(),
            duration_minutes: 30.0,
            calories_burned: Some(300.0),
            heart_rate_avg: Some(150),
            age: Some(30),
            weight_kg: Some(70.0),
            gender: None,
        }
    }

    #[test]
    fn sanitize_drops_broken_durations_but_keeps_zero() {
        let mut broken = workout(1);
        broken.duration_minutes = f64::NAN;
        let mut negative = workout(2);
        negative.duration_minutes = -10.0;
        let mut zero = workout(3);
        zero.duration_minutes = 0.0;

        let clean = sanitize(&[broken, negative, zero]);
        assert_eq!(clean.len(), 1);
        assert!((clean[0].duration_minutes - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sanitize_degrades_broken_calories_to_absent() {
        let mut record = workout(1);
        record.calories_burned = Some(f64::INFINITY);
        let clean = sanitize(std::slice::from_ref(&record));
        assert_eq!(clean.len(), 1);
        assert!(clean[0].calories_burned.is_none());
    }

    #[test]
    fn sanitize_orders_chronologically() {
        let clean = sanitize(&[workout(1), workout(5), workout(3)]);
        assert!(clean.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = ScoringConfig::default();
        config.history.max_history_days = -5;
        let result = ScoringEngine::with_config(
            InMemoryWorkoutLog::new(),
            InMemoryHistoryStore::new(),
            config,
        );
        assert!(result.is_err());
    }

    #[test]
    fn refresh_index_scores_the_provider_history() {
        let log = InMemoryWorkoutLog::new();
        let user = Uuid::new_v4();
        log.log_workout(user, workout(1));
        let engine = ScoringEngine::new(log, InMemoryHistoryStore::new());

        let snapshot = engine.refresh_index(user, None);
        assert_eq!(snapshot.workout_count, 1);
        assert!(snapshot.score > 0);
    }
}
