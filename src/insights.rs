// ABOUTME: Typed insight generation from index snapshots and streak summaries
// ABOUTME: Level assessment, trend commentary, component focus, streak achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Index Contributors

//! Insight generation.
//!
//! Turns a computed snapshot (plus the streak summary) into short, typed
//! messages the caller can render directly. Purely derived data; nothing
//! here is persisted or fed back into scoring.

use crate::models::{IndexSnapshot, PerformanceLevel};
use crate::pattern_detection::StreakSummary;
use crate::physiological_constants::streaks::MIN_STREAK_FOR_INSIGHT;
use crate::trend::TrendDirection;
use serde::{Deserialize, Serialize};

/// An insight derived from a computed snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Category of insight
    pub insight_type: InsightType,

    /// Human-readable insight message
    pub message: String,

    /// Confidence level (0-100)
    pub confidence: f32,
}

/// Categories of snapshot insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Where the current score places the user
    LevelAssessment,
    /// What the recent score movement means
    TrendCommentary,
    /// Which component is holding the index back
    ComponentFocus,
    /// Notable workout-day streaks
    StreakAchievement,
}

/// Generate insights for a snapshot and its streak summary
///
/// Always yields a level assessment; the remaining categories appear when
/// the underlying data supports them.
#[must_use]
pub fn generate_snapshot_insights(
    snapshot: &IndexSnapshot,
    streaks: &StreakSummary,
) -> Vec<Insight> {
    let mut insights = vec![level_insight(snapshot)];

    if let Some(insight) = trend_insight(snapshot) {
        insights.push(insight);
    }
    if let Some(insight) = component_insight(snapshot) {
        insights.push(insight);
    }
    if let Some(insight) = streak_insight(streaks) {
        insights.push(insight);
    }

    insights
}

fn level_insight(snapshot: &IndexSnapshot) -> Insight {
    let message = match snapshot.level {
        PerformanceLevel::EliteAthlete => {
            "Elite territory - your training is firing on all cylinders".to_owned()
        }
        PerformanceLevel::Advanced => {
            "Advanced level - strong, well-rounded training habits".to_owned()
        }
        PerformanceLevel::Intermediate => {
            "Intermediate level - a solid base with room to push further".to_owned()
        }
        PerformanceLevel::Developing => {
            "Developing level - momentum is building, keep showing up".to_owned()
        }
        PerformanceLevel::Beginner => {
            "Beginner level - the habit is forming, consistency pays off from here".to_owned()
        }
        PerformanceLevel::GettingStarted => {
            "Getting started - every workout from here moves the needle".to_owned()
        }
        PerformanceLevel::NewUser => {
            "Welcome - log a few workouts to establish your baseline".to_owned()
        }
    };

    Insight {
        insight_type: InsightType::LevelAssessment,
        message,
        confidence: 90.0,
    }
}

fn trend_insight(snapshot: &IndexSnapshot) -> Option<Insight> {
    // A trend verdict needs history; the zero-state has none worth narrating
    if snapshot.workout_count == 0 {
        return None;
    }

    let (message, confidence) = match snapshot.trend {
        TrendDirection::Improving => (
            "Your index is trending up - recent training is paying off".to_owned(),
            80.0,
        ),
        TrendDirection::Declining => (
            "Your index has slipped recently - a few steady sessions will turn it around"
                .to_owned(),
            80.0,
        ),
        TrendDirection::Stable => (
            "Your index is holding steady - vary intensity or type to break the plateau"
                .to_owned(),
            70.0,
        ),
    };

    Some(Insight {
        insight_type: InsightType::TrendCommentary,
        message,
        confidence,
    })
}

fn component_insight(snapshot: &IndexSnapshot) -> Option<Insight> {
    if snapshot.workout_count == 0 {
        return None;
    }

    let (name, value) = snapshot.components.weakest();
    let suggestion = match name {
        "consistency" => "more frequent sessions would lift it fastest",
        "performance" => "pushing calorie output toward your targets would lift it fastest",
        "variety" => "mixing in a different workout type would lift it fastest",
        _ => "adding higher-effort sessions would lift it fastest",
    };

    Some(Insight {
        insight_type: InsightType::ComponentFocus,
        message: format!("{name} is your lowest component at {value} - {suggestion}"),
        confidence: 85.0,
    })
}

fn streak_insight(streaks: &StreakSummary) -> Option<Insight> {
    if streaks.current_streak_days < MIN_STREAK_FOR_INSIGHT {
        return None;
    }

    let message = if streaks.current_streak_days >= streaks.longest_streak_days {
        format!(
            "{}-day streak - your longest yet, keep it alive",
            streaks.current_streak_days
        )
    } else {
        format!(
            "{}-day streak going - your record is {} days",
            streaks.current_streak_days, streaks.longest_streak_days
        )
    };

    Some(Insight {
        insight_type: InsightType::StreakAchievement,
        message,
        confidence: 95.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentScores;
    use chrono::Utc;

    fn snapshot(score: u8, components: ComponentScores, workout_count: u32) -> IndexSnapshot {
        IndexSnapshot {
            score,
            level: PerformanceLevel::from_score(score),
            components,
            trend: TrendDirection::Stable,
            timestamp: Utc::now(),
            workout_count,
        }
    }

    #[test]
    fn zero_state_yields_only_the_level_insight() {
        let snapshot = IndexSnapshot::new_user(Utc::now());
        let insights = generate_snapshot_insights(&snapshot, &StreakSummary::default());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].insight_type, InsightType::LevelAssessment);
    }

    #[test]
    fn component_focus_targets_the_weakest_component() {
        let components = ComponentScores {
            consistency: 80,
            performance: 70,
            variety: 25,
            intensity: 60,
        };
        let insights =
            generate_snapshot_insights(&snapshot(65, components, 12), &StreakSummary::default());
        let focus = insights
            .iter()
            .find(|i| i.insight_type == InsightType::ComponentFocus)
            .unwrap();
        assert!(focus.message.contains("variety"));
    }

    #[test]
    fn short_streaks_are_not_worth_announcing() {
        let streaks = StreakSummary {
            current_streak_days: 2,
            longest_streak_days: 9,
            active_days: 20,
        };
        let components = ComponentScores {
            consistency: 50,
            performance: 50,
            variety: 50,
            intensity: 50,
        };
        let insights = generate_snapshot_insights(&snapshot(50, components, 20), &streaks);
        assert!(insights
            .iter()
            .all(|i| i.insight_type != InsightType::StreakAchievement));
    }

    #[test]
    fn record_streaks_are_called_out() {
        let streaks = StreakSummary {
            current_streak_days: 7,
            longest_streak_days: 7,
            active_days: 15,
        };
        let components = ComponentScores {
            consistency: 50,
            performance: 50,
            variety: 50,
            intensity: 50,
        };
        let insights = generate_snapshot_insights(&snapshot(50, components, 20), &streaks);
        let streak = insights
            .iter()
            .find(|i| i.insight_type == InsightType::StreakAchievement)
            .unwrap();
        assert!(streak.message.contains("longest yet"));
    }
}
