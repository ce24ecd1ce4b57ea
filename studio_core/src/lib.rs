#![forbid(unsafe_code)]

//! Core domain model and derived-metrics logic for the Fitdesk studio suite.
//!
//! This crate provides:
//! - Domain types (clients, packages, diet plans, sessions, progress logs)
//! - The static display catalog (achievements, meal names, meal times)
//! - The snapshot boundary that normalizes store documents
//! - Diet plan generation and assignment
//! - Progress, achievement, analytics, session, and notification metrics
//!
//! Everything here computes over immutable in-memory snapshots; the external
//! API owns entity lifecycle and persistence.

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod snapshot;
pub mod roster;
pub mod mealplan;
pub mod assignment;
pub mod progress;
pub mod achievements;
pub mod analytics;
pub mod sessions;
pub mod notifications;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use snapshot::{default_snapshot_path, load_snapshot, StudioSnapshot};
pub use roster::{resolve_clients, ResolvedClient};
pub use mealplan::{build_plan, generate_meals};
pub use assignment::{
    build_assignments, partition_by_diet_access, AssignmentRoster, ClientSelection, PlanTemplate,
};
pub use progress::{client_goal_progress, goal_progress, progress_summary, weight_history_trends};
pub use achievements::{evaluate_catalog, AchievementReport};
pub use analytics::{plan_overview, studio_analytics, videos_in_category, StudioAnalytics};
pub use sessions::{partition_sessions, SessionBoard};
pub use notifications::{badge_label, kind_color, unread_count};
