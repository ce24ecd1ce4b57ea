//! Weight progress and goal computation.
//!
//! All functions here are pure: they read an ordered weight history plus the
//! client's start and goal weights and produce display-ready values. Nothing
//! is cached or written back.

use crate::types::{ClientProgress, WeightEntry};

/// Which way the remaining distance to goal points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalDirection {
    ToLose,
    ToGain,
    Achieved,
}

/// Progress toward a weight goal
#[derive(Clone, Copy, Debug)]
pub struct GoalProgress {
    pub start: f64,
    pub current: f64,
    pub goal: f64,
    /// Percent of the start→goal span covered, clamped to [0, 100]
    pub percent: f64,
    /// `current - goal`; magnitude is the distance left
    pub remaining: f64,
    pub direction: GoalDirection,
}

/// Compute progress from start toward goal given the current weight.
///
/// The percent is `(start - current) / (start - goal) * 100`, clamped to
/// [0, 100]. A goal equal to the start weight would divide by zero, so that
/// case is handled explicitly: exactly on goal counts as 100%, anything else
/// as 0%.
pub fn goal_progress(start: f64, goal: f64, current: f64) -> GoalProgress {
    let percent = if (start - goal).abs() < f64::EPSILON {
        if (current - goal).abs() < f64::EPSILON {
            100.0
        } else {
            0.0
        }
    } else {
        ((start - current) / (start - goal) * 100.0).clamp(0.0, 100.0)
    };

    let remaining = current - goal;
    let direction = if remaining.abs() < f64::EPSILON {
        GoalDirection::Achieved
    } else if remaining > 0.0 {
        GoalDirection::ToLose
    } else {
        GoalDirection::ToGain
    };

    GoalProgress {
        start,
        current,
        goal,
        percent,
        remaining,
        direction,
    }
}

/// Goal progress for a client's progress section.
///
/// Returns None when the client has no goal set or no logged weight. The
/// start weight falls back to the current weight when it was never recorded.
pub fn client_goal_progress(progress: &ClientProgress) -> Option<GoalProgress> {
    let goal = progress.goal_weight?;
    let current = progress.weight_history.last()?.weight;
    let start = progress.start_weight.unwrap_or(current);
    Some(goal_progress(start, goal, current))
}

/// Direction of a single history step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Change relative to the previous entry
#[derive(Clone, Copy, Debug)]
pub struct EntryChange {
    pub trend: Trend,
    /// Absolute difference in kg
    pub delta: f64,
}

/// A weight entry annotated with its step trend
#[derive(Clone, Debug)]
pub struct HistoryPoint {
    pub entry: WeightEntry,
    /// None for the first entry, which has nothing to compare against
    pub change: Option<EntryChange>,
}

/// Annotate an ordered-by-date history with per-entry trend indicators.
///
/// An entry strictly below its predecessor trends down; otherwise it trends
/// up (an unchanged weight renders as an upward step, matching the original
/// display).
pub fn weight_history_trends(history: &[WeightEntry]) -> Vec<HistoryPoint> {
    history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let change = i.checked_sub(1).map(|prev| {
                let previous = &history[prev];
                let trend = if entry.weight < previous.weight {
                    Trend::Down
                } else {
                    Trend::Up
                };
                EntryChange {
                    trend,
                    delta: (entry.weight - previous.weight).abs(),
                }
            });

            HistoryPoint {
                entry: entry.clone(),
                change,
            }
        })
        .collect()
}

/// Net direction of the whole journey so far
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeDirection {
    Lost,
    Gained,
}

/// Headline numbers for the progress charts page
#[derive(Clone, Copy, Debug)]
pub struct ProgressSummary {
    /// Absolute difference between current and start weight
    pub total_change: f64,
    pub direction: ChangeDirection,
    pub tracking_days: usize,
    pub measurement_entries: usize,
}

/// Summarize a client's tracking history. None without any logged weight.
pub fn progress_summary(progress: &ClientProgress) -> Option<ProgressSummary> {
    let current = progress.weight_history.last()?.weight;
    let start = progress.start_weight.unwrap_or(current);

    let direction = if current < start {
        ChangeDirection::Lost
    } else {
        ChangeDirection::Gained
    };

    Some(ProgressSummary {
        total_change: (current - start).abs(),
        direction,
        tracking_days: progress.weight_history.len(),
        measurement_entries: progress.measurements.len(),
    })
}
