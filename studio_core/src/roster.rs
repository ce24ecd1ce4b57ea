//! Package reference resolution for the client roster.
//!
//! A client's entitlement is determined by dereferencing its `package_id`
//! against the package collection. A dangling or missing reference resolves
//! to "no package", which disables every package-gated action downstream.

use crate::types::{Client, Package};
use std::collections::HashMap;

/// A client joined with its resolved package, if any
#[derive(Clone, Debug)]
pub struct ResolvedClient {
    pub client: Client,
    pub package: Option<Package>,
}

impl ResolvedClient {
    /// Whether this client's package grants diet plan assignment
    pub fn has_diet_plan_access(&self) -> bool {
        self.package.as_ref().map_or(false, |p| p.diet_plan_access)
    }

    /// Monthly price contributed by this client (0 without a package)
    pub fn package_price(&self) -> f64 {
        self.package.as_ref().map_or(0.0, |p| p.price)
    }

    /// Display name of the resolved package
    pub fn package_name(&self) -> Option<&str> {
        self.package.as_ref().map(|p| p.name.as_str())
    }
}

/// Resolve every client's package reference against the package collection.
///
/// Preserves the input client order. Unresolvable references are logged at
/// debug level; they are an expected state (client without a subscription),
/// not an error.
pub fn resolve_clients(clients: &[Client], packages: &[Package]) -> Vec<ResolvedClient> {
    let by_id: HashMap<&str, &Package> =
        packages.iter().map(|p| (p.id.as_str(), p)).collect();

    clients
        .iter()
        .map(|client| {
            let package = client
                .package_id
                .as_deref()
                .and_then(|id| by_id.get(id))
                .map(|p| (*p).clone());

            if package.is_none() {
                tracing::debug!(
                    "Client {} has no resolvable package ({:?})",
                    client.id,
                    client.package_id
                );
            }

            ResolvedClient {
                client: client.clone(),
                package,
            }
        })
        .collect()
}
