// ABOUTME: Engine configuration for snapshot retention and trend classification
// ABOUTME: Defaults mirror the physiological constants; validation guards tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Scoring engine configuration.
//!
//! The component formulas and their weights are part of the index contract
//! and are not configurable; retention and trend classification are.

use crate::errors::ConfigError;
use crate::physiological_constants::{history, trend};
use serde::{Deserialize, Serialize};

/// Scoring engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Snapshot history retention settings
    pub history: HistoryConfig,
    /// Trend classification settings
    pub trend: TrendConfig,
}

/// Snapshot history retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Snapshots older than this many days are pruned on every write
    pub max_history_days: i64,
}

/// Trend classification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Snapshot window examined for the short-term trend (days)
    pub window_days: i64,
    /// Minimum snapshots in the window for a non-stable verdict
    pub min_data_points: usize,
    /// Mean-score gain above which the trend is improving
    pub improvement_threshold: f64,
    /// Mean-score loss below which the trend is declining
    pub decline_threshold: f64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_history_days: history::MAX_HISTORY_DAYS,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_days: trend::WINDOW_DAYS,
            min_data_points: trend::MIN_DATA_POINTS,
            improvement_threshold: trend::IMPROVEMENT_THRESHOLD,
            decline_threshold: trend::DECLINE_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a window or retention value is not
    /// positive, or when the trend thresholds have the wrong sign.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.max_history_days < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "history.max_history_days must be at least 1",
            ));
        }
        if self.trend.window_days < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "trend.window_days must be at least 1",
            ));
        }
        if self.trend.min_data_points < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "trend.min_data_points must be at least 1",
            ));
        }
        if self.trend.improvement_threshold <= 0.0 || !self.trend.improvement_threshold.is_finite()
        {
            return Err(ConfigError::InvalidThreshold(
                "trend.improvement_threshold must be positive and finite",
            ));
        }
        if self.trend.decline_threshold >= 0.0 || !self.trend.decline_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(
                "trend.decline_threshold must be negative and finite",
            ));
        }
        Ok(())
    }
}
