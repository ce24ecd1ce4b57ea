use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studio_core::*;

#[derive(Parser)]
#[command(name = "fitdesk")]
#[command(about = "Fitness studio metrics and diet plan generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the studio snapshot JSON (defaults to <data-dir>/studio.json)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Studio analytics: revenue, package distribution, recent signups
    Analytics,

    /// Live session board grouped by status
    Sessions,

    /// Weight progress report for one client
    Progress {
        /// Client id
        #[arg(long)]
        client: String,
    },

    /// Achievement report for one client
    Achievements {
        /// Client id
        #[arg(long)]
        client: String,
    },

    /// Notification center summary
    Notifications,

    /// Preview a generated meal plan without assigning it
    Plan {
        /// Daily calorie target
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        calories: i32,

        /// Number of meals (defaults from config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        meals: Option<u32>,

        /// Diet type: low-carb, high-protein, balanced, ketogenic, vegan
        #[arg(long)]
        diet_type: Option<DietType>,
    },

    /// Generate diet plan records for selected clients and emit them as JSON
    Assign {
        /// Plan name shown to clients
        #[arg(long)]
        plan_name: String,

        /// Daily calorie target
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        calories: i32,

        /// Number of meals (defaults from config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        meals: Option<u32>,

        /// Diet type: low-carb, high-protein, balanced, ketogenic, vegan
        #[arg(long)]
        diet_type: Option<DietType>,

        /// Comma-separated client ids
        #[arg(long, value_delimiter = ',', required = true)]
        clients: Vec<String>,

        /// Write the records to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    studio_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let snapshot_path = cli
        .snapshot
        .unwrap_or_else(|| default_snapshot_path(&data_dir));

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match cli.command {
        Commands::Analytics => cmd_analytics(&snapshot_path),
        Commands::Sessions => cmd_sessions(&snapshot_path),
        Commands::Progress { client } => cmd_progress(&snapshot_path, &client),
        Commands::Achievements { client } => cmd_achievements(&snapshot_path, catalog, &client),
        Commands::Notifications => cmd_notifications(&snapshot_path),
        Commands::Plan {
            calories,
            meals,
            diet_type,
        } => cmd_plan(catalog, &config, calories, meals, diet_type),
        Commands::Assign {
            plan_name,
            calories,
            meals,
            diet_type,
            clients,
            out,
        } => cmd_assign(
            &snapshot_path,
            catalog,
            &config,
            plan_name,
            calories,
            meals,
            diet_type,
            clients,
            out,
        ),
    }
}

fn banner(title: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", title);
    println!("╰─────────────────────────────────────────╯");
    println!();
}

fn cmd_analytics(snapshot_path: &std::path::Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let roster = resolve_clients(&snapshot.clients, &snapshot.packages);
    let analytics = studio_analytics(&roster, &snapshot.packages);
    let plans = plan_overview(&snapshot.diet_plans);

    banner("STUDIO ANALYTICS");

    println!(
        "  Total clients:   {} ({} active)",
        analytics.total_clients, analytics.active_clients
    );
    println!("  Monthly revenue: ${:.2}", analytics.monthly_revenue);
    println!("  Video library:   {} videos", snapshot.videos.len());
    println!();

    println!("  Package distribution:");
    if analytics.distribution.is_empty() {
        println!("    (no packages)");
    }
    for slice in &analytics.distribution {
        println!(
            "    {:<12} {} clients ({}%)",
            slice.name, slice.count, slice.percentage
        );
    }
    println!();

    println!("  Recent signups:");
    if analytics.recent_signups.is_empty() {
        println!("    (no recent signups)");
    }
    for signup in &analytics.recent_signups {
        println!(
            "    {} — {} (joined {})",
            signup.name,
            signup.package_name.as_deref().unwrap_or("No Package"),
            signup.joined.format("%b %d")
        );
    }
    println!();

    println!(
        "  Diet plans: {} total, {} active, {} client(s) covered",
        plans.total_plans, plans.active_plans, plans.clients_on_plans
    );
    println!();

    Ok(())
}

fn cmd_sessions(snapshot_path: &std::path::Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let board = partition_sessions(&snapshot.sessions);

    banner("LIVE TRAINING SESSIONS");

    let groups = [
        ("Live now", &board.live),
        ("Upcoming", &board.upcoming),
        ("Completed", &board.completed),
    ];

    for (label, sessions) in groups {
        println!("  {} ({})", label, sessions.len());
        for session in sessions.iter() {
            println!(
                "    {} — {} · {} · {} min · {}/{} joined · {} spot(s) left",
                session.title,
                session.trainer,
                session.scheduled_at.format("%b %d, %H:%M"),
                session.duration_minutes,
                session.participants,
                session.max_participants,
                session.spots_left()
            );
        }
        println!();
    }

    Ok(())
}

fn cmd_progress(snapshot_path: &std::path::Path, client_id: &str) -> Result<()> {
    use studio_core::progress::{ChangeDirection, GoalDirection, Trend};

    let snapshot = load_snapshot(snapshot_path)?;
    let progress = snapshot
        .progress_for(client_id)
        .ok_or_else(|| Error::Other(format!("no progress recorded for client {}", client_id)))?;

    banner("WEIGHT TRACKING");

    match progress.weight_history.last() {
        Some(current) => println!(
            "  Current weight: {} kg (logged {})",
            current.weight,
            current.date.format("%b %d, %Y")
        ),
        None => println!("  Current weight: not recorded"),
    }

    match client_goal_progress(progress) {
        Some(goal) => {
            let remaining = match goal.direction {
                GoalDirection::ToLose => format!("{:.1} kg to lose", goal.remaining.abs()),
                GoalDirection::ToGain => format!("{:.1} kg to gain", goal.remaining.abs()),
                GoalDirection::Achieved => "Goal achieved!".to_string(),
            };
            println!("  Goal weight:    {} kg — {}", goal.goal, remaining);
            println!("  Progress:       {:.0}% complete", goal.percent);
        }
        None => println!("  Goal weight:    not set"),
    }
    println!();

    if let Some(summary) = progress_summary(progress) {
        let direction = match summary.direction {
            ChangeDirection::Lost => "lost",
            ChangeDirection::Gained => "gained",
        };
        println!(
            "  Total change: {:.1} kg {} over {} entries ({} measurement(s))",
            summary.total_change, direction, summary.tracking_days, summary.measurement_entries
        );
        println!();
    }

    println!("  History:");
    for point in weight_history_trends(&progress.weight_history) {
        let marker = match point.change {
            Some(change) => {
                let arrow = match change.trend {
                    Trend::Up => "↑",
                    Trend::Down => "↓",
                };
                format!("  {} {:.1} kg", arrow, change.delta)
            }
            None => String::new(),
        };
        println!(
            "    {}  {} kg{}",
            point.entry.date.format("%b %d"),
            point.entry.weight,
            marker
        );
    }
    println!();

    Ok(())
}

fn cmd_achievements(
    snapshot_path: &std::path::Path,
    catalog: &Catalog,
    client_id: &str,
) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    // Clients without a progress section start from zero, like a fresh account
    let stats = snapshot
        .progress_for(client_id)
        .map(|p| p.stats)
        .unwrap_or_default();

    let report = evaluate_catalog(catalog, &stats);

    banner("ACHIEVEMENTS");

    println!(
        "  Unlocked {}/{} ({:.0}% complete)",
        report.unlocked_count, report.total, report.completion_percent
    );
    println!(
        "  {} total workouts · {} day streak",
        stats.total_workouts, stats.current_streak
    );
    println!();

    for status in &report.statuses {
        let mark = if status.unlocked { "✓" } else { " " };
        println!(
            "  {} {:<18} {}/{}  ({:.0}%)",
            mark,
            status.def.title,
            status.current,
            status.def.requirement,
            status.progress_percent
        );
    }
    println!();

    Ok(())
}

fn cmd_notifications(snapshot_path: &std::path::Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let unread = unread_count(&snapshot.notifications);

    banner("NOTIFICATIONS");

    println!(
        "  {} notification(s), {} unread (badge: {})",
        snapshot.notifications.len(),
        unread,
        badge_label(unread)
    );
    println!();

    for notification in &snapshot.notifications {
        let mark = if notification.is_read { " " } else { "•" };
        println!(
            "  {} [{:?}] {} — {}",
            mark,
            kind_color(notification.kind),
            notification.title,
            notification.message
        );
    }
    println!();

    Ok(())
}

fn cmd_plan(
    catalog: &Catalog,
    config: &Config,
    calories: i32,
    meals: Option<u32>,
    diet_type: Option<DietType>,
) -> Result<()> {
    let meal_count = meals.unwrap_or(config.plans.default_meal_count);
    let diet_type = diet_type.unwrap_or(config.plans.default_diet_type);

    let schedule = generate_meals(catalog, calories, meal_count, diet_type);

    banner("MEAL PLAN PREVIEW");

    println!(
        "  {} · {} kcal/day · {} meals",
        diet_type, calories, meal_count
    );
    println!();

    for meal in &schedule {
        println!(
            "  {:<9} {:<28} {} kcal · {}g protein / {}g carbs / {}g fats",
            meal.time, meal.name, meal.calories, meal.protein, meal.carbs, meal.fats
        );
    }
    println!();

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_assign(
    snapshot_path: &std::path::Path,
    catalog: &Catalog,
    config: &Config,
    plan_name: String,
    calories: i32,
    meals: Option<u32>,
    diet_type: Option<DietType>,
    clients: Vec<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let resolved = resolve_clients(&snapshot.clients, &snapshot.packages);
    let roster = partition_by_diet_access(resolved);

    let mut selection = ClientSelection::new();
    for id in &clients {
        if !selection.is_selected(id) {
            selection.toggle(id);
        }
    }

    let template = PlanTemplate {
        name: plan_name,
        target_calories: calories,
        meal_count: meals.unwrap_or(config.plans.default_meal_count),
        diet_type: diet_type.unwrap_or(config.plans.default_diet_type),
    };

    let plans = build_assignments(catalog, &template, &selection, &roster)?;
    tracing::info!("Generated {} diet plan record(s)", plans.len());
    let payload = serde_json::to_string_pretty(&plans).map_err(Error::Json)?;

    match out {
        Some(path) => {
            std::fs::write(&path, payload)?;
            println!(
                "✓ Wrote {} diet plan record(s) to {}",
                plans.len(),
                path.display()
            );
        }
        None => {
            // Records only on stdout so the output can be piped to the API
            println!("{}", payload);
        }
    }

    Ok(())
}
