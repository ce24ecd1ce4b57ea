//! Core domain types for the fitness-studio metrics layer.
//!
//! This module defines the entity shapes consumed from the external store:
//! - Clients, packages, and the entitlement fields that gate features
//! - Diet plans and their generated meals
//! - Live sessions, notifications, and workout videos
//! - Per-client progress logs (weight, measurements, workout stats)
//!
//! All collections are read-only snapshots; the store owns their lifecycle.
//! External documents use camelCase keys, so the serde derives follow suit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Clients and Packages
// ============================================================================

/// A studio member.
///
/// `package_id` is already normalized by the snapshot boundary: whether the
/// store sent a raw id or an expanded package object, only the id survives
/// to this layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub package_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A subscription tier gating feature access
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Store documents may carry Mongo-style `_id`
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    pub video_access: bool,
    pub live_sessions_per_month: u32,
    pub diet_plan_access: bool,
    pub workout_plan_access: bool,
}

// ============================================================================
// Diet Plans
// ============================================================================

/// Diet style a plan is generated for
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietType {
    #[serde(rename = "Low Carb")]
    LowCarb,
    #[serde(rename = "High Protein")]
    HighProtein,
    Balanced,
    Ketogenic,
    Vegan,
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DietType::LowCarb => "Low Carb",
            DietType::HighProtein => "High Protein",
            DietType::Balanced => "Balanced",
            DietType::Ketogenic => "Ketogenic",
            DietType::Vegan => "Vegan",
        };
        f.write_str(name)
    }
}

impl FromStr for DietType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "lowcarb" => Ok(DietType::LowCarb),
            "highprotein" => Ok(DietType::HighProtein),
            "balanced" => Ok(DietType::Balanced),
            "ketogenic" | "keto" => Ok(DietType::Ketogenic),
            "vegan" => Ok(DietType::Vegan),
            _ => Err(crate::Error::Other(format!("unknown diet type: {}", s))),
        }
    }
}

/// Lifecycle state of a diet plan
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Paused,
    Completed,
}

/// A single meal within a generated diet plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub time: String,
    pub name: String,
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

/// A generated nutrition schedule assigned to one client.
///
/// The plan header carries the whole-plan macro targets; `meals` is the
/// ordered schedule produced by the generator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub id: Uuid,
    pub client_id: String,
    pub name: String,
    pub target_calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
    pub meals: Vec<Meal>,
    pub status: PlanStatus,
}

// ============================================================================
// Live Sessions
// ============================================================================

/// Session lifecycle state
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Upcoming,
    Live,
    Completed,
}

/// A scheduled group training session
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSession {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub trainer: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub participants: u32,
    pub max_participants: u32,
    pub status: SessionStatus,
    pub meeting_link: Option<String>,
}

// ============================================================================
// Progress Tracking
// ============================================================================

/// One logged weight measurement
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub date: DateTime<Utc>,
    pub weight: f64,
}

/// One logged body-measurement record (all tapes optional)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MeasurementEntry {
    pub date: DateTime<Utc>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
}

/// Current workout stats for one client, as reported by the store.
///
/// Achievement unlock state is never persisted; it is recomputed from these
/// three values every time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    pub total_workouts: u32,
    pub current_streak: u32,
    pub goal_reached: bool,
}

/// Per-client progress section of the studio snapshot
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientProgress {
    #[serde(default)]
    pub start_weight: Option<f64>,
    #[serde(default)]
    pub goal_weight: Option<f64>,
    /// Ordered by date, oldest first
    #[serde(default)]
    pub weight_history: Vec<WeightEntry>,
    /// Ordered by date, oldest first
    #[serde(default)]
    pub measurements: Vec<MeasurementEntry>,
    #[serde(default)]
    pub stats: ClientStats,
}

// ============================================================================
// Achievements
// ============================================================================

/// Which stat an achievement is measured against
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Workouts,
    Streaks,
    Goals,
}

/// A badge definition from the static catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Numeric threshold; for `Goals` this is a boolean flag (1 = reached)
    pub requirement: u32,
    pub category: AchievementCategory,
}

// ============================================================================
// Notifications and Videos
// ============================================================================

/// Notification category, used only for display tagging
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Session,
    Payment,
    Achievement,
    Reminder,
    #[serde(other)]
    Other,
}

/// An in-app notification for one user
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A workout video in the on-demand library
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub duration_minutes: u32,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The static display catalog: achievement definitions, per-diet-type meal
/// name lists, and the fixed meal-time table.
///
/// Built once at startup and passed by reference into the generator and
/// evaluator components; nothing in this layer mutates it.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Ordered as displayed on the achievements page
    pub achievements: Vec<AchievementDef>,
    pub meal_names: std::collections::HashMap<DietType, Vec<String>>,
    /// Fixed time slots for the first meals of the day
    pub meal_times: Vec<String>,
}
