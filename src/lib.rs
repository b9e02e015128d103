// ABOUTME: Performance index scoring engine for workout history analysis
// ABOUTME: Computes weighted component scores, levels, trends, and snapshot history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! # Fitness Index
//!
//! Scoring engine that turns a user's workout history into a 0-100
//! performance index. Four weighted component scores (consistency,
//! performance, variety, intensity) are aggregated, classified into a
//! performance level, and stored as dated snapshots so short-term trends
//! and period-over-period comparisons can be derived.
//!
//! The engine owns no persistence and no transport: workout records arrive
//! from a [`WorkoutHistoryProvider`], computed snapshots are written through
//! a [`HistoryStore`], and both collaborators are injected at construction.
//! In-memory implementations of both ship for tests and embedding callers.
//!
//! ```
//! use fitness_index::{InMemoryHistoryStore, InMemoryWorkoutLog, ScoringEngine};
//! use uuid::Uuid;
//!
//! let engine = ScoringEngine::new(InMemoryWorkoutLog::new(), InMemoryHistoryStore::new());
//! let snapshot = engine.compute_index(Uuid::new_v4(), &[], None);
//! assert_eq!(snapshot.score, 0);
//! ```

/// Sub-score calculators for the four index components
pub mod algorithms;
/// Engine configuration (retention window, trend thresholds)
pub mod config;
/// The scoring engine and its collaborator seams
pub mod engine;
/// Configuration error types
pub mod errors;
/// Snapshot history storage, dedupe, and retention policy
pub mod history;
/// Snapshot and streak insight generation
pub mod insights;
/// Typed workout, subject, and snapshot models
pub mod models;
/// Workout-day streak detection
pub mod pattern_detection;
/// Scoring constants grounded in exercise physiology
pub mod physiological_constants;
/// Workout history provider seam
pub mod providers;
/// Trend classification and period comparison
pub mod trend;

pub use config::{HistoryConfig, ScoringConfig, TrendConfig};
pub use engine::ScoringEngine;
pub use errors::ConfigError;
pub use history::{HistoryStore, InMemoryHistoryStore};
pub use insights::{generate_snapshot_insights, Insight, InsightType};
pub use models::{
    ComponentScores, Gender, IndexSnapshot, PerformanceLevel, SubjectContext, WorkoutRecord,
};
pub use pattern_detection::{StreakDetector, StreakSummary};
pub use providers::{InMemoryWorkoutLog, WorkoutHistoryProvider};
pub use trend::{PeriodComparison, TrendDirection};
