//! Achievement evaluation.
//!
//! Unlock state is a pure function of the client's current stats and the
//! static catalog; it is recomputed on every call and never stored.

use crate::types::{AchievementCategory, AchievementDef, Catalog, ClientStats};

/// One achievement's computed state for a client
#[derive(Clone, Debug)]
pub struct AchievementStatus {
    pub def: AchievementDef,
    pub unlocked: bool,
    /// The stat value the requirement is measured against
    pub current: u32,
    /// Percent toward the requirement, clamped to [0, 100]
    pub progress_percent: f64,
}

/// Evaluate a single achievement definition against current stats
pub fn evaluate(def: &AchievementDef, stats: &ClientStats) -> AchievementStatus {
    let (current, unlocked, progress_percent) = match def.category {
        AchievementCategory::Workouts => {
            let current = stats.total_workouts;
            (
                current,
                current >= def.requirement,
                ratio_percent(current, def.requirement),
            )
        }
        AchievementCategory::Streaks => {
            let current = stats.current_streak;
            (
                current,
                current >= def.requirement,
                ratio_percent(current, def.requirement),
            )
        }
        AchievementCategory::Goals => {
            // Boolean flag: all or nothing
            let current = u32::from(stats.goal_reached);
            let percent = if stats.goal_reached { 100.0 } else { 0.0 };
            (current, stats.goal_reached, percent)
        }
    };

    AchievementStatus {
        def: def.clone(),
        unlocked,
        current,
        progress_percent,
    }
}

fn ratio_percent(current: u32, requirement: u32) -> f64 {
    if requirement == 0 {
        // Guarded by catalog validation; nothing sensible to show otherwise
        return 0.0;
    }
    (f64::from(current) / f64::from(requirement) * 100.0).clamp(0.0, 100.0)
}

/// Every achievement's state plus the aggregate unlock numbers
#[derive(Clone, Debug)]
pub struct AchievementReport {
    /// In catalog order
    pub statuses: Vec<AchievementStatus>,
    pub unlocked_count: usize,
    pub total: usize,
    pub completion_percent: f64,
}

/// Evaluate the full catalog for one client's stats
pub fn evaluate_catalog(catalog: &Catalog, stats: &ClientStats) -> AchievementReport {
    let statuses: Vec<AchievementStatus> = catalog
        .achievements
        .iter()
        .map(|def| evaluate(def, stats))
        .collect();

    let unlocked_count = statuses.iter().filter(|s| s.unlocked).count();
    let total = statuses.len();
    let completion_percent = if total == 0 {
        0.0
    } else {
        unlocked_count as f64 / total as f64 * 100.0
    };

    tracing::debug!(
        "Evaluated achievements: {}/{} unlocked",
        unlocked_count,
        total
    );

    AchievementReport {
        statuses,
        unlocked_count,
        total,
        completion_percent,
    }
}
