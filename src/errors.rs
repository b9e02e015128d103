// ABOUTME: Configuration error types for scoring engine validation
// ABOUTME: Defines variants for invalid windows, retention, and thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Configuration error types.
//!
//! Scoring itself never fails: malformed workout input degrades to
//! documented defaults at the sanitization boundary. The only fallible
//! surface is engine configuration.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Trend threshold pair is malformed (wrong sign or ordering)
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(&'static str),
}
