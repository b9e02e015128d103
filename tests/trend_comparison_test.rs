// ABOUTME: Integration tests for trend classification and period comparison
// ABOUTME: Plants snapshot histories and checks deltas, percent change, and verdicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use fitness_index::{
    ComponentScores, HistoryStore, IndexSnapshot, InMemoryHistoryStore, InMemoryWorkoutLog,
    PerformanceLevel, ScoringEngine, TrendDirection, WorkoutRecord,
};
use std::sync::Arc;
use uuid::Uuid;

fn shared_engine() -> (
    ScoringEngine<InMemoryWorkoutLog, Arc<InMemoryHistoryStore>>,
    Arc<InMemoryHistoryStore>,
) {
    let store = Arc::new(InMemoryHistoryStore::new());
    let engine = ScoringEngine::new(InMemoryWorkoutLog::new(), Arc::clone(&store));
    (engine, store)
}

fn snapshot(score: u8, timestamp: DateTime<Utc>) -> IndexSnapshot {
    IndexSnapshot {
        score,
        level: PerformanceLevel::from_score(score),
        components: ComponentScores::default(),
        trend: TrendDirection::Stable,
        timestamp,
        workout_count: 5,
    }
}

fn workout(days_ago: i64) -> WorkoutRecord {
    WorkoutRecord {
        timestamp: Utc::now() - Duration::days(days_ago),
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
fn comparison_needs_at_least_two_snapshots() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    assert!(engine.compare_with_previous(user, 7).is_none());

    store.append(user, snapshot(50, Utc::now() - Duration::hours(1)));
    assert!(engine.compare_with_previous(user, 7).is_none());
}

#[test]
fn comparison_needs_a_snapshot_before_the_cutoff() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    // Both snapshots inside the 7-day window: nothing to compare against
    store.append(user, snapshot(50, Utc::now() - Duration::days(2)));
    store.append(user, snapshot(60, Utc::now() - Duration::days(1)));
    assert!(engine.compare_with_previous(user, 7).is_none());
}

#[test]
fn weekly_comparison_reports_difference_and_percent_change() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    store.append(user, snapshot(50, Utc::now() - Duration::days(10)));
    store.append(user, snapshot(60, Utc::now() - Duration::hours(1)));

    let comparison = engine.compare_with_previous(user, 7).unwrap();
    assert_eq!(comparison.previous.score, 50);
    assert_eq!(comparison.current.score, 60);
    assert_eq!(comparison.difference, 10);
    assert!((comparison.percent_change - 20.0).abs() < 1e-9);
    assert_eq!(comparison.trend, TrendDirection::Improving);
}

#[test]
fn comparison_picks_the_latest_snapshot_before_the_cutoff() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    store.append(user, snapshot(20, Utc::now() - Duration::days(20)));
    store.append(user, snapshot(40, Utc::now() - Duration::days(9)));
    store.append(user, snapshot(45, Utc::now() - Duration::hours(1)));

    let comparison = engine.compare_with_previous(user, 7).unwrap();
    assert_eq!(comparison.previous.score, 40);
    assert_eq!(comparison.difference, 5);
    assert_eq!(comparison.trend, TrendDirection::Stable);
}

#[test]
fn declines_beyond_the_threshold_classify_as_declining() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    store.append(user, snapshot(70, Utc::now() - Duration::days(40)));
    store.append(user, snapshot(55, Utc::now() - Duration::hours(1)));

    let comparison = engine.compare_with_previous(user, 30).unwrap();
    assert_eq!(comparison.difference, -15);
    assert_eq!(comparison.trend, TrendDirection::Declining);
}

#[test]
fn percent_change_is_zero_when_the_previous_score_is_zero() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    store.append(user, snapshot(0, Utc::now() - Duration::days(10)));
    store.append(user, snapshot(40, Utc::now() - Duration::hours(1)));

    let comparison = engine.compare_with_previous(user, 7).unwrap();
    assert_eq!(comparison.difference, 40);
    assert!(comparison.percent_change.abs() < f64::EPSILON);
    assert_eq!(comparison.trend, TrendDirection::Improving);
}

#[test]
fn rising_snapshot_history_marks_new_snapshots_as_improving() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    let now = Utc::now();
    store.append(user, snapshot(35, now - Duration::days(8)));
    store.append(user, snapshot(38, now - Duration::days(6)));
    store.append(user, snapshot(50, now - Duration::days(3)));
    store.append(user, snapshot(55, now - Duration::days(1)));

    let history: Vec<WorkoutRecord> = (1..=8).map(workout).collect();
    let fresh = engine.score_at(user, &history, None, now);
    assert_eq!(fresh.trend, TrendDirection::Improving);
}

#[test]
fn flat_snapshot_history_marks_new_snapshots_as_stable() {
    let (engine, store) = shared_engine();
    let user = Uuid::new_v4();
    let now = Utc::now();
    store.append(user, snapshot(50, now - Duration::days(8)));
    store.append(user, snapshot(52, now - Duration::days(6)));
    store.append(user, snapshot(51, now - Duration::days(3)));
    store.append(user, snapshot(53, now - Duration::days(1)));

    let history: Vec<WorkoutRecord> = (1..=8).map(workout).collect();
    let fresh = engine.score_at(user, &history, None, now);
    assert_eq!(fresh.trend, TrendDirection::Stable);
}
