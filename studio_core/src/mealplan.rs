//! Diet plan generation.
//!
//! Plans are generated from a calorie target, a meal count, and a diet type:
//! - Calories are divided evenly across meals, rounded per meal
//! - Macros follow a fixed 30/40/30 protein/carbs/fats split, applied both
//!   per meal and to the plan header
//! - Meal names come from the catalog's per-diet-type list, times from the
//!   catalog's fixed slot table

use crate::types::{Catalog, DietPlan, DietType, Meal, PlanStatus};
use uuid::Uuid;

// Fixed macro split and energy densities (kcal per gram)
const PROTEIN_RATIO: f64 = 0.30;
const CARBS_RATIO: f64 = 0.40;
const FATS_RATIO: f64 = 0.30;
const PROTEIN_KCAL: f64 = 4.0;
const CARBS_KCAL: f64 = 4.0;
const FATS_KCAL: f64 = 9.0;

/// Macro grams for a calorie amount under the fixed 30/40/30 split.
///
/// Each macro is rounded independently, so the re-summed energy can drift
/// from the input by a few kcal. This mirrors the upstream calculation and
/// is an accepted approximation, not reconciled.
fn macro_split(calories: f64) -> (i32, i32, i32) {
    let protein = (calories * PROTEIN_RATIO / PROTEIN_KCAL).round() as i32;
    let carbs = (calories * CARBS_RATIO / CARBS_KCAL).round() as i32;
    let fats = (calories * FATS_RATIO / FATS_KCAL).round() as i32;
    (protein, carbs, fats)
}

/// Time slot for the meal at `index`.
///
/// The fixed table covers the first five meals. Later slots are synthesized
/// as `{8 + 3*index}:00 AM`, which does not wrap into PM; the intended
/// display format past five meals is unresolved upstream, so the formula is
/// kept verbatim.
fn meal_time(catalog: &Catalog, index: usize) -> String {
    catalog
        .meal_times
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("{}:00 AM", 8 + 3 * index))
}

/// Generate an ordered meal schedule for a calorie target.
///
/// Per-meal calories are `round(target / meal_count)`, rounded independently
/// per meal (totals may drift from the target by up to `meal_count * 0.5`
/// kcal). A diet type with no catalog name list falls back to the Balanced
/// list; meals past the end of the list are named `Meal {n}`.
///
/// `meal_count` of zero produces an empty schedule; callers are expected to
/// reject it before reaching this function.
pub fn generate_meals(
    catalog: &Catalog,
    target_calories: i32,
    meal_count: u32,
    diet_type: DietType,
) -> Vec<Meal> {
    if meal_count == 0 {
        return Vec::new();
    }

    let calories_per_meal = (f64::from(target_calories) / f64::from(meal_count)).round() as i32;
    let (protein, carbs, fats) = macro_split(f64::from(calories_per_meal));

    let names: &[String] = catalog
        .meal_names
        .get(&diet_type)
        .or_else(|| catalog.meal_names.get(&DietType::Balanced))
        .map(|v| v.as_slice())
        .unwrap_or(&[]);

    (0..meal_count as usize)
        .map(|i| Meal {
            time: meal_time(catalog, i),
            name: names
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Meal {}", i + 1)),
            calories: calories_per_meal,
            protein,
            carbs,
            fats,
        })
        .collect()
}

/// Build a complete diet plan record for one client.
///
/// The header macros apply the same 30/40/30 split to the whole-plan target.
/// New plans are stamped with a fresh id and start out active.
pub fn build_plan(
    catalog: &Catalog,
    client_id: &str,
    name: &str,
    target_calories: i32,
    meal_count: u32,
    diet_type: DietType,
) -> DietPlan {
    let (protein, carbs, fats) = macro_split(f64::from(target_calories));

    tracing::debug!(
        "Building plan '{}' for client {}: {} kcal over {} meals ({})",
        name,
        client_id,
        target_calories,
        meal_count,
        diet_type
    );

    DietPlan {
        id: Uuid::new_v4(),
        client_id: client_id.into(),
        name: name.into(),
        target_calories,
        protein,
        carbs,
        fats,
        meals: generate_meals(catalog, target_calories, meal_count, diet_type),
        status: PlanStatus::Active,
    }
}
