//! Studio-wide aggregates for the admin and trainer dashboards.
//!
//! Revenue, package distribution, signup activity, the workout-video
//! library, and diet-plan coverage are all derived here from resolved
//! snapshots; nothing is stored.

use crate::roster::ResolvedClient;
use crate::types::{DietPlan, Package, PlanStatus, Video};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Recent-signup list length on the analytics page
const RECENT_SIGNUP_LIMIT: usize = 3;

/// Chart color tag for one distribution bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    Chart1,
    Chart2,
    Chart3,
}

/// Color by package name. Cosmetic convention: Basic and Premium have fixed
/// tags, every other name falls through to the default.
fn color_tag(package_name: &str) -> ColorTag {
    match package_name {
        "Basic" => ColorTag::Chart1,
        "Premium" => ColorTag::Chart2,
        _ => ColorTag::Chart3,
    }
}

/// One package's share of the client base
#[derive(Clone, Debug)]
pub struct PackageSlice {
    pub name: String,
    pub count: usize,
    /// `round(count / total_clients * 100)`, 0 when there are no clients
    pub percentage: u32,
    pub color: ColorTag,
}

/// A recently joined client, for the signups panel
#[derive(Clone, Debug)]
pub struct RecentSignup {
    pub client_id: String,
    pub name: String,
    pub joined: DateTime<Utc>,
    /// None renders as "No Package"
    pub package_name: Option<String>,
}

/// The admin analytics page numbers
#[derive(Clone, Debug)]
pub struct StudioAnalytics {
    pub total_clients: usize,
    /// Clients with a resolvable package
    pub active_clients: usize,
    pub monthly_revenue: f64,
    /// One slice per catalog package, in catalog order
    pub distribution: Vec<PackageSlice>,
    /// Newest first, capped at three
    pub recent_signups: Vec<RecentSignup>,
}

/// Compute the studio analytics from the resolved roster and the package
/// catalog.
///
/// Clients without a resolved package count toward the totals but contribute
/// no revenue and no distribution slice. Percentages are rounded per slice
/// independently and may not sum to exactly 100.
pub fn studio_analytics(roster: &[ResolvedClient], packages: &[Package]) -> StudioAnalytics {
    let total_clients = roster.len();
    let active_clients = roster.iter().filter(|c| c.package.is_some()).count();
    let monthly_revenue: f64 = roster.iter().map(ResolvedClient::package_price).sum();

    let distribution = packages
        .iter()
        .map(|pkg| {
            let count = roster
                .iter()
                .filter(|c| c.package.as_ref().map(|p| p.id.as_str()) == Some(pkg.id.as_str()))
                .count();
            let percentage = if total_clients > 0 {
                (count as f64 / total_clients as f64 * 100.0).round() as u32
            } else {
                0
            };
            PackageSlice {
                name: pkg.name.clone(),
                count,
                percentage,
                color: color_tag(&pkg.name),
            }
        })
        .collect();

    let mut by_join_date: Vec<&ResolvedClient> = roster.iter().collect();
    by_join_date.sort_by(|a, b| b.client.created_at.cmp(&a.client.created_at));

    let recent_signups = by_join_date
        .into_iter()
        .take(RECENT_SIGNUP_LIMIT)
        .map(|c| RecentSignup {
            client_id: c.client.id.clone(),
            name: c.client.name.clone(),
            joined: c.client.created_at,
            package_name: c.package_name().map(String::from),
        })
        .collect();

    tracing::info!(
        "Analytics: {} clients ({} active), ${:.2} monthly revenue",
        total_clients,
        active_clients,
        monthly_revenue
    );

    StudioAnalytics {
        total_clients,
        active_clients,
        monthly_revenue,
        distribution,
        recent_signups,
    }
}

/// Diet-plan coverage numbers for the trainer dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanOverview {
    pub total_plans: usize,
    pub active_plans: usize,
    /// Distinct clients with at least one plan
    pub clients_on_plans: usize,
}

/// Summarize a trainer's diet plans
pub fn plan_overview(plans: &[DietPlan]) -> PlanOverview {
    let clients: HashSet<&str> = plans.iter().map(|p| p.client_id.as_str()).collect();

    PlanOverview {
        total_plans: plans.len(),
        active_plans: plans
            .iter()
            .filter(|p| p.status == PlanStatus::Active)
            .count(),
        clients_on_plans: clients.len(),
    }
}

/// Filter the video library by category. `"All"` returns the whole library.
pub fn videos_in_category<'a>(videos: &'a [Video], category: &str) -> Vec<&'a Video> {
    if category == "All" {
        return videos.iter().collect();
    }
    videos.iter().filter(|v| v.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Client;
    use chrono::Duration;

    fn package(id: &str, name: &str, price: f64) -> Package {
        Package {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            features: vec![],
            video_access: true,
            live_sessions_per_month: 0,
            diet_plan_access: true,
            workout_plan_access: true,
        }
    }

    fn resolved(id: &str, name: &str, days_ago: i64, package: Option<Package>) -> ResolvedClient {
        ResolvedClient {
            client: Client {
                id: id.into(),
                name: name.into(),
                phone: "555-0100".into(),
                package_id: package.as_ref().map(|p| p.id.clone()),
                created_at: Utc::now() - Duration::days(days_ago),
            },
            package,
        }
    }

    #[test]
    fn test_monthly_revenue_skips_unresolved() {
        let roster = vec![
            resolved("c1", "Alice", 5, Some(package("p1", "Basic", 29.99))),
            resolved("c2", "Bob", 4, None),
            resolved("c3", "Cara", 3, Some(package("p2", "Premium", 59.99))),
        ];

        let analytics = studio_analytics(&roster, &[]);

        assert_eq!(analytics.total_clients, 3);
        assert_eq!(analytics.active_clients, 2);
        assert!((analytics.monthly_revenue - 89.98).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_counts_and_colors() {
        let basic = package("p1", "Basic", 29.99);
        let premium = package("p2", "Premium", 59.99);
        let elite = package("p3", "Elite", 99.99);

        let roster = vec![
            resolved("c1", "Alice", 1, Some(basic.clone())),
            resolved("c2", "Bob", 2, Some(basic.clone())),
            resolved("c3", "Cara", 3, Some(premium.clone())),
        ];
        let packages = vec![basic, premium, elite];

        let analytics = studio_analytics(&roster, &packages);
        let dist = &analytics.distribution;

        assert_eq!(dist.len(), 3);
        assert_eq!((dist[0].count, dist[0].percentage), (2, 67));
        assert_eq!((dist[1].count, dist[1].percentage), (1, 33));
        assert_eq!((dist[2].count, dist[2].percentage), (0, 0));
        assert_eq!(dist[0].color, ColorTag::Chart1);
        assert_eq!(dist[1].color, ColorTag::Chart2);
        assert_eq!(dist[2].color, ColorTag::Chart3);
    }

    #[test]
    fn test_empty_roster_yields_zero_percentages() {
        let packages = vec![package("p1", "Basic", 29.99)];
        let analytics = studio_analytics(&[], &packages);

        assert_eq!(analytics.total_clients, 0);
        assert_eq!(analytics.monthly_revenue, 0.0);
        assert_eq!(analytics.distribution[0].percentage, 0);
        assert!(analytics.recent_signups.is_empty());
    }

    #[test]
    fn test_recent_signups_newest_first_capped_at_three() {
        let roster = vec![
            resolved("c1", "Alice", 10, None),
            resolved("c2", "Bob", 1, None),
            resolved("c3", "Cara", 7, None),
            resolved("c4", "Dana", 2, None),
        ];

        let analytics = studio_analytics(&roster, &[]);
        let names: Vec<&str> = analytics
            .recent_signups
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(names, vec!["Bob", "Dana", "Cara"]);
    }

    #[test]
    fn test_unmapped_package_gets_default_tag() {
        assert_eq!(color_tag("Basic"), ColorTag::Chart1);
        assert_eq!(color_tag("Premium"), ColorTag::Chart2);
        assert_eq!(color_tag("Elite"), ColorTag::Chart3);
        assert_eq!(color_tag("Corporate Special"), ColorTag::Chart3);
    }

    #[test]
    fn test_plan_overview_distinct_clients() {
        let catalog = crate::catalog::build_default_catalog();
        let mut plans = vec![
            crate::mealplan::build_plan(&catalog, "c1", "A", 2000, 4, crate::DietType::Balanced),
            crate::mealplan::build_plan(&catalog, "c1", "B", 1800, 3, crate::DietType::Vegan),
            crate::mealplan::build_plan(&catalog, "c2", "C", 2200, 5, crate::DietType::Ketogenic),
        ];
        plans[1].status = PlanStatus::Completed;

        let overview = plan_overview(&plans);
        assert_eq!(overview.total_plans, 3);
        assert_eq!(overview.active_plans, 2);
        assert_eq!(overview.clients_on_plans, 2);
    }

    #[test]
    fn test_video_category_filter() {
        let videos = vec![
            Video {
                id: "v1".into(),
                title: "Full Body Strength".into(),
                category: "Strength".into(),
                duration_minutes: 45,
            },
            Video {
                id: "v2".into(),
                title: "Morning Yoga Flow".into(),
                category: "Yoga".into(),
                duration_minutes: 30,
            },
            Video {
                id: "v3".into(),
                title: "Upper Body Power".into(),
                category: "Strength".into(),
                duration_minutes: 40,
            },
        ];

        assert_eq!(videos_in_category(&videos, "All").len(), 3);
        let strength = videos_in_category(&videos, "Strength");
        assert_eq!(strength.len(), 2);
        assert!(strength.iter().all(|v| v.category == "Strength"));
        assert!(videos_in_category(&videos, "HIIT").is_empty());
    }
}
