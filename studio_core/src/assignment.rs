//! Diet plan assignment: eligibility, selection, and record building.
//!
//! Assignment is gated by the client's package: only packages with
//! `diet_plan_access` may receive a plan. Selection is a plain set of client
//! ids; submitting an empty selection is a recoverable validation failure,
//! not an exception.

use crate::mealplan::build_plan;
use crate::roster::ResolvedClient;
use crate::types::{Catalog, DietPlan, DietType};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Why a client cannot be assigned a diet plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IneligibleReason {
    /// No resolvable package at all
    NoPackage,
    /// Package exists but does not include diet plans
    NoDietAccess,
}

/// Clients partitioned by diet-plan entitlement
#[derive(Clone, Debug, Default)]
pub struct AssignmentRoster {
    pub eligible: Vec<ResolvedClient>,
    pub ineligible: Vec<(ResolvedClient, IneligibleReason)>,
}

impl AssignmentRoster {
    pub fn is_eligible(&self, client_id: &str) -> bool {
        self.eligible.iter().any(|c| c.client.id == client_id)
    }
}

/// Partition resolved clients into assignable and not-assignable
pub fn partition_by_diet_access(clients: Vec<ResolvedClient>) -> AssignmentRoster {
    let mut roster = AssignmentRoster::default();

    for client in clients {
        if client.has_diet_plan_access() {
            roster.eligible.push(client);
        } else {
            let reason = if client.package.is_none() {
                IneligibleReason::NoPackage
            } else {
                IneligibleReason::NoDietAccess
            };
            roster.ineligible.push((client, reason));
        }
    }

    tracing::debug!(
        "Partitioned roster: {} eligible, {} ineligible",
        roster.eligible.len(),
        roster.ineligible.len()
    );

    roster
}

/// A set of client ids staged for assignment.
///
/// Toggling is idempotent: toggling the same id twice restores the prior
/// contents.
#[derive(Clone, Debug, Default)]
pub struct ClientSelection {
    selected: BTreeSet<String>,
}

impl ClientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of one client; returns whether the client is
    /// selected afterwards.
    pub fn toggle(&mut self, client_id: &str) -> bool {
        if self.selected.remove(client_id) {
            false
        } else {
            self.selected.insert(client_id.to_string());
            true
        }
    }

    pub fn is_selected(&self, client_id: &str) -> bool {
        self.selected.contains(client_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}

/// The plan parameters shared by every client in one assignment
#[derive(Clone, Debug)]
pub struct PlanTemplate {
    pub name: String,
    pub target_calories: i32,
    pub meal_count: u32,
    pub diet_type: DietType,
}

/// Build one diet plan record per selected client.
///
/// This is the submission boundary: it rejects empty selections ("no clients
/// selected"), non-positive plan parameters, and any selected client outside
/// the eligible set, and it performs no work in those cases.
pub fn build_assignments(
    catalog: &Catalog,
    template: &PlanTemplate,
    selection: &ClientSelection,
    roster: &AssignmentRoster,
) -> Result<Vec<DietPlan>> {
    if selection.is_empty() {
        return Err(Error::Assignment("no clients selected".into()));
    }
    if template.target_calories <= 0 {
        return Err(Error::Assignment(
            "target calories must be positive".into(),
        ));
    }
    if template.meal_count == 0 {
        return Err(Error::Assignment("meal count must be at least 1".into()));
    }

    for id in selection.ids() {
        if !roster.is_eligible(id) {
            return Err(Error::Assignment(format!(
                "client {} does not have diet plan access",
                id
            )));
        }
    }

    let plans: Vec<DietPlan> = selection
        .ids()
        .map(|client_id| {
            build_plan(
                catalog,
                client_id,
                &template.name,
                template.target_calories,
                template.meal_count,
                template.diet_type,
            )
        })
        .collect();

    tracing::info!(
        "Built {} diet plan record(s) for '{}'",
        plans.len(),
        template.name
    );

    Ok(plans)
}
