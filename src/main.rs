use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use partsdash::{
    Config, ThemeChoice, ViewMode,
    core::inventory::{Inventory, Part, PartFilter, Project, ProjectRepository, ProjectStats},
    logging,
};

#[derive(Parser)]
#[command(name = "partsdash")]
#[command(about = "Automotive parts inventory dashboard")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard window (default)
    Gui(GuiArgs),
    /// Print the demo inventory, optionally filtered
    List {
        /// Case-insensitive search over name, SKU, location, category, make and model
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category tab to show ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the category tabs of the demo inventory
    Categories,
    /// Print every project with its allocated parts
    Projects {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GuiArgs {
    /// Initial layout of the parts list
    #[arg(long, value_enum, default_value_t = ViewMode::Grid)]
    view: ViewMode,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Start with an empty inventory instead of the demo parts
    #[arg(long)]
    empty: bool,

    /// How long notifications stay on screen
    #[arg(long, value_name = "SECONDS", default_value_t = 3)]
    toast_secs: u64,
}

impl From<GuiArgs> for Config {
    fn from(args: GuiArgs) -> Self {
        Config {
            view_mode: args.view,
            theme: args.theme,
            seed_demo_data: !args.empty,
            toast_duration: Duration::from_secs(args.toast_secs),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    match args.command.unwrap_or_else(|| Command::Gui(GuiArgs::default_args())) {
        Command::Gui(gui_args) => launch_gui(gui_args.into()),
        Command::List {
            query,
            category,
            json,
        } => print_parts(&Inventory::with_demo_data(), &PartFilter::new(query, category), json),
        Command::Categories => {
            for category in Inventory::with_demo_data().categories() {
                println!("{category}");
            }
            Ok(())
        }
        Command::Projects { json } => print_projects(&Inventory::with_demo_data(), json),
    }
}

impl GuiArgs {
    fn default_args() -> Self {
        let config = Config::default();
        Self {
            view: config.view_mode,
            theme: config.theme,
            empty: !config.seed_demo_data,
            toast_secs: config.toast_duration.as_secs(),
        }
    }
}

#[cfg(feature = "gui")]
fn launch_gui(config: Config) -> anyhow::Result<()> {
    partsdash::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_config: Config) -> anyhow::Result<()> {
    anyhow::bail!("partsdash was built without the `gui` feature; try `partsdash list`")
}

fn print_parts(inventory: &Inventory, filter: &PartFilter, json: bool) -> anyhow::Result<()> {
    let parts = inventory.filter(filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
        return Ok(());
    }

    println!("\n=== Parts ({} of {} in stock) ===", parts.len(), inventory.len());
    if parts.is_empty() {
        println!("No parts found.");
        return Ok(());
    }
    for part in parts {
        println!(
            "  [{}] {} ({}) - {} {} - {} - qty {} - {} - {}",
            part.id,
            part.name,
            part.sku.as_deref().unwrap_or("no SKU"),
            part.make,
            part.model,
            part.category,
            part.quantity,
            part.condition,
            part.location,
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ProjectReport<'a> {
    #[serde(flatten)]
    project: &'a Project,
    stats: ProjectStats,
    parts: Vec<&'a Part>,
}

fn print_projects(inventory: &Inventory, json: bool) -> anyhow::Result<()> {
    if json {
        let report: Vec<ProjectReport> = inventory
            .get_projects()
            .iter()
            .map(|project| ProjectReport {
                project,
                stats: inventory.get_project_stats(&project.id),
                parts: inventory.get_project_parts(&project.id),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== Projects ({}) ===", inventory.get_projects().len());
    for project in inventory.get_projects() {
        let stats = inventory.get_project_stats(&project.id);
        println!("\n{}", project.name);
        if let Some(description) = &project.description {
            println!("  {description}");
        }
        println!(
            "  Total Parts: {}  Total Quantity: {}",
            stats.total_parts, stats.total_quantity
        );
        let parts = inventory.get_project_parts(&project.id);
        if parts.is_empty() {
            println!("  No parts allocated to this project yet");
        }
        for part in parts {
            println!("  - {} ({} {}) qty {}", part.name, part.make, part.model, part.quantity);
        }
    }
    Ok(())
}
