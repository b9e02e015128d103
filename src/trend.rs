// ABOUTME: Trend classification over snapshot history and period comparison
// ABOUTME: Half-split mean comparison with symmetric improvement/decline thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Trend direction and period-over-period comparison.
#![allow(clippy::cast_precision_loss)] // Safe: snapshot counts are small

use crate::config::TrendConfig;
use crate::models::IndexSnapshot;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Direction of recent score movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Scores are rising
    Improving,
    /// Scores are falling
    Declining,
    /// No meaningful movement, or not enough data
    Stable,
}

/// Result of comparing the current snapshot against a prior period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodComparison {
    /// Latest snapshot
    pub current: IndexSnapshot,
    /// Latest snapshot strictly older than the lookback cutoff
    pub previous: IndexSnapshot,
    /// `current.score - previous.score`
    pub difference: i32,
    /// Difference relative to the previous score, in percent (0 when the
    /// previous score is 0)
    pub percent_change: f64,
    /// Direction classified from the sign and size of `difference`
    pub trend: TrendDirection,
}

/// Classify a score delta against the configured thresholds
pub(crate) fn classify_score_delta(delta: f64, config: &TrendConfig) -> TrendDirection {
    if delta > config.improvement_threshold {
        TrendDirection::Improving
    } else if delta < config.decline_threshold {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Classify the short-term trend from recent snapshot history
///
/// Snapshots inside the configured window are split by count into an older
/// and a newer half; the verdict compares the mean score of each half.
/// Fewer than the configured minimum of points yields `Stable`.
pub(crate) fn classify_snapshot_trend(
    history: &[IndexSnapshot],
    now: DateTime<Utc>,
    config: &TrendConfig,
) -> TrendDirection {
    let cutoff = now - Duration::days(config.window_days);
    let mut recent: Vec<&IndexSnapshot> =
        history.iter().filter(|s| s.timestamp >= cutoff).collect();
    if recent.len() < config.min_data_points {
        return TrendDirection::Stable;
    }
    recent.sort_by_key(|s| s.timestamp);

    let half = recent.len() / 2;
    let older_mean = recent[..half]
        .iter()
        .map(|s| f64::from(s.score))
        .sum::<f64>()
        / half as f64;
    let newer_mean = recent[half..]
        .iter()
        .map(|s| f64::from(s.score))
        .sum::<f64>()
        / (recent.len() - half) as f64;

    classify_score_delta(newer_mean - older_mean, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentScores, PerformanceLevel};
    use chrono::TimeZone;

    fn snapshot(score: u8, timestamp: DateTime<Utc>) -> IndexSnapshot {
        IndexSnapshot {
            score,
            level: PerformanceLevel::from_score(score),
            components: ComponentScores::default(),
            trend: TrendDirection::Stable,
            timestamp,
            workout_count: 1,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn fewer_than_three_points_is_stable() {
        let now = fixed_now();
        let history = vec![
            snapshot(10, now - Duration::days(2)),
            snapshot(90, now - Duration::days(1)),
        ];
        let config = TrendConfig::default();
        assert_eq!(
            classify_snapshot_trend(&history, now, &config),
            TrendDirection::Stable
        );
    }

    #[test]
    fn rising_scores_classify_as_improving() {
        let now = fixed_now();
        let history = vec![
            snapshot(40, now - Duration::days(6)),
            snapshot(42, now - Duration::days(4)),
            snapshot(55, now - Duration::days(2)),
            snapshot(60, now - Duration::days(1)),
        ];
        let config = TrendConfig::default();
        assert_eq!(
            classify_snapshot_trend(&history, now, &config),
            TrendDirection::Improving
        );
    }

    #[test]
    fn falling_scores_classify_as_declining() {
        let now = fixed_now();
        let history = vec![
            snapshot(70, now - Duration::days(6)),
            snapshot(68, now - Duration::days(4)),
            snapshot(50, now - Duration::days(2)),
            snapshot(48, now - Duration::days(1)),
        ];
        let config = TrendConfig::default();
        assert_eq!(
            classify_snapshot_trend(&history, now, &config),
            TrendDirection::Declining
        );
    }

    #[test]
    fn small_movement_is_stable() {
        let now = fixed_now();
        let history = vec![
            snapshot(50, now - Duration::days(6)),
            snapshot(52, now - Duration::days(4)),
            snapshot(53, now - Duration::days(2)),
            snapshot(54, now - Duration::days(1)),
        ];
        let config = TrendConfig::default();
        assert_eq!(
            classify_snapshot_trend(&history, now, &config),
            TrendDirection::Stable
        );
    }

    #[test]
    fn snapshots_outside_the_window_are_ignored() {
        let now = fixed_now();
        // Old high scores fall outside the 14-day window, leaving only two
        // recent points, so the verdict is stable rather than declining.
        let history = vec![
            snapshot(95, now - Duration::days(40)),
            snapshot(95, now - Duration::days(30)),
            snapshot(20, now - Duration::days(2)),
            snapshot(20, now - Duration::days(1)),
        ];
        let config = TrendConfig::default();
        assert_eq!(
            classify_snapshot_trend(&history, now, &config),
            TrendDirection::Stable
        );
    }
}
