//! Default catalog of achievements, meal names, and meal times.
//!
//! This module provides the built-in display catalog for the system.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// This function returns a reference to the pre-built catalog, avoiding
/// the overhead of rebuilding it on every operation.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with built-in achievements and meal tables
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    // ========================================================================
    // Achievements
    // ========================================================================

    let achievements = vec![
        AchievementDef {
            id: "first-workout".into(),
            title: "First Step".into(),
            description: "Complete your first workout".into(),
            requirement: 1,
            category: AchievementCategory::Workouts,
        },
        AchievementDef {
            id: "7-day-streak".into(),
            title: "7 Day Warrior".into(),
            description: "Maintain a 7-day workout streak".into(),
            requirement: 7,
            category: AchievementCategory::Streaks,
        },
        AchievementDef {
            id: "10-workouts".into(),
            title: "Dedicated Ten".into(),
            description: "Complete 10 total workouts".into(),
            requirement: 10,
            category: AchievementCategory::Workouts,
        },
        AchievementDef {
            id: "50-workouts".into(),
            title: "Half Century".into(),
            description: "Complete 50 total workouts".into(),
            requirement: 50,
            category: AchievementCategory::Workouts,
        },
        AchievementDef {
            id: "100-workouts".into(),
            title: "Century Club".into(),
            description: "Complete 100 total workouts".into(),
            requirement: 100,
            category: AchievementCategory::Workouts,
        },
        AchievementDef {
            id: "30-day-streak".into(),
            title: "Monthly Momentum".into(),
            description: "Maintain a 30-day workout streak".into(),
            requirement: 30,
            category: AchievementCategory::Streaks,
        },
        AchievementDef {
            id: "weight-goal".into(),
            title: "Goal Crusher".into(),
            description: "Reach your weight goal".into(),
            requirement: 1,
            category: AchievementCategory::Goals,
        },
    ];

    // ========================================================================
    // Meal Name Lists
    // ========================================================================

    let mut meal_names: HashMap<DietType, Vec<String>> = HashMap::new();

    meal_names.insert(
        DietType::LowCarb,
        vec![
            "Scrambled Eggs & Avocado".into(),
            "Grilled Chicken Salad".into(),
            "Almonds & Cheese".into(),
            "Salmon with Vegetables".into(),
        ],
    );

    meal_names.insert(
        DietType::HighProtein,
        vec![
            "Protein Pancakes".into(),
            "Turkey & Quinoa Bowl".into(),
            "Protein Shake".into(),
            "Lean Beef with Broccoli".into(),
        ],
    );

    meal_names.insert(
        DietType::Balanced,
        vec![
            "Oatmeal with Berries".into(),
            "Chicken & Rice".into(),
            "Greek Yogurt & Fruit".into(),
            "Fish with Sweet Potato".into(),
        ],
    );

    meal_names.insert(
        DietType::Ketogenic,
        vec![
            "Keto Breakfast Bowl".into(),
            "Keto Chicken Salad".into(),
            "Keto Snack Plate".into(),
            "Keto Dinner".into(),
        ],
    );

    meal_names.insert(
        DietType::Vegan,
        vec![
            "Tofu Scramble".into(),
            "Lentil Buddha Bowl".into(),
            "Hummus & Veggies".into(),
            "Vegan Stir Fry".into(),
        ],
    );

    // ========================================================================
    // Meal Times
    // ========================================================================

    let meal_times = vec![
        "7:00 AM".into(),
        "12:00 PM".into(),
        "3:00 PM".into(),
        "7:00 PM".into(),
        "9:00 PM".into(),
    ];

    Catalog {
        achievements,
        meal_names,
        meal_times,
    }
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen_ids = HashSet::new();
        for def in &self.achievements {
            if def.id.is_empty() {
                errors.push("Achievement has empty ID".to_string());
            }
            if def.title.is_empty() {
                errors.push(format!("Achievement '{}' has empty title", def.id));
            }
            // Requirement 0 would make every progress ratio divide by zero
            if def.requirement == 0 {
                errors.push(format!("Achievement '{}' has zero requirement", def.id));
            }
            if !seen_ids.insert(def.id.clone()) {
                errors.push(format!("Duplicate achievement ID '{}'", def.id));
            }
        }

        // Every category must be represented so the evaluator's aggregate
        // report covers all stat kinds
        for category in [
            AchievementCategory::Workouts,
            AchievementCategory::Streaks,
            AchievementCategory::Goals,
        ] {
            if !self.achievements.iter().any(|d| d.category == category) {
                errors.push(format!("Catalog has no {:?} achievements", category));
            }
        }

        for (diet_type, names) in &self.meal_names {
            if names.is_empty() {
                errors.push(format!("Meal name list for {} is empty", diet_type));
            }
            if names.iter().any(|n| n.is_empty()) {
                errors.push(format!("Meal name list for {} has an empty entry", diet_type));
            }
        }

        // Balanced is the fallback list for unrecognized diet types
        if !self.meal_names.contains_key(&DietType::Balanced) {
            errors.push("Catalog has no Balanced meal name list".to_string());
        }

        if self.meal_times.is_empty() {
            errors.push("Catalog has no meal time slots".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.achievements.len(), 7);
        assert_eq!(catalog.meal_names.len(), 5);
        assert_eq!(catalog.meal_times.len(), 5);
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_all_categories_present() {
        let catalog = build_default_catalog();
        for category in [
            AchievementCategory::Workouts,
            AchievementCategory::Streaks,
            AchievementCategory::Goals,
        ] {
            assert!(
                catalog.achievements.iter().any(|d| d.category == category),
                "Missing category {:?}",
                category
            );
        }
    }

    #[test]
    fn test_known_thresholds() {
        let catalog = build_default_catalog();
        let by_id = |id: &str| {
            catalog
                .achievements
                .iter()
                .find(|d| d.id == id)
                .unwrap_or_else(|| panic!("missing achievement {}", id))
        };

        assert_eq!(by_id("first-workout").requirement, 1);
        assert_eq!(by_id("7-day-streak").requirement, 7);
        assert_eq!(by_id("100-workouts").requirement, 100);
        assert_eq!(by_id("weight-goal").category, AchievementCategory::Goals);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = build_default_catalog();
        let dup = catalog.achievements[0].clone();
        catalog.achievements.push(dup);

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("Duplicate")));
    }

    #[test]
    fn test_zero_requirement_rejected() {
        let mut catalog = build_default_catalog();
        catalog.achievements[0].requirement = 0;

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("zero requirement")));
    }

    #[test]
    fn test_balanced_list_required() {
        let mut catalog = build_default_catalog();
        catalog.meal_names.remove(&DietType::Balanced);

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("Balanced")));
    }
}
