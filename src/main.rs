use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

use tutorlms::router::{RouteTarget, NAV_LINKS};
use tutorlms::{handler, logging, tui, ui};
use tutorlms::{App, Config, FileStorage, RouteTable, Store};

#[derive(Parser)]
#[command(name = "tutorlms")]
#[command(about = "Terminal front-end for TutorLMS SAT preparation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to open at startup (overrides config)
    #[arg(long, global = true)]
    path: Option<String>,

    /// Force a theme and save it as the preference
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeArg>,

    /// Key-value storage file (overrides config)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive shell (default)
    Run,
    /// Print the route table
    Routes,
    /// Show which page a path resolves to
    Resolve {
        /// Path to resolve, e.g. /dashboard
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {} (using defaults)", "Could not load config".yellow(), e);
            Config::default()
        }
    };
    if let Some(path) = cli.path {
        config.initial_path = path;
    }
    if let Some(storage) = cli.storage {
        config.storage_path = Some(storage);
    }

    let _log_guard = match Config::config_dir() {
        Ok(dir) => logging::init(&dir, &config.log_level).ok(),
        Err(_) => None,
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&config, cli.theme).await?,
        Commands::Routes => print_routes(),
        Commands::Resolve { path } => print_resolution(&path),
    }

    Ok(())
}

fn open_store(config: &Config, theme: Option<ThemeArg>) -> Store {
    let storage_path = config
        .storage_path
        .clone()
        .or_else(|| FileStorage::default_path().ok());

    let mut store = match storage_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using storage file");
            Store::new(FileStorage::new(path))
        }
        None => {
            tracing::warn!("no storage location available, preferences will not persist");
            Store::in_memory()
        }
    };

    match theme {
        Some(ThemeArg::Dark) => store.set_dark_mode(true),
        Some(ThemeArg::Light) => store.set_dark_mode(false),
        None => {}
    }
    store
}

async fn run(config: &Config, theme: Option<ThemeArg>) -> Result<()> {
    let store = open_store(config, theme);
    let mut app = App::from_config(config, store);
    tracing::info!(path = %app.navigator.location(), "starting shell");

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = tui::EventHandler::new(config.tick_rate());

    let result = async {
        while !app.should_quit {
            terminal.draw(|frame| ui::render(&mut app, frame))?;
            match events.next().await {
                Some(event) => handler::handle_event(&mut app, event),
                None => break,
            }
        }
        anyhow::Ok(())
    }
    .await;

    tui::restore()?;
    result
}

fn print_routes() {
    let table = RouteTable::new();

    println!("\n{}", format!("{} routes", ui::PRODUCT_NAME).bold().blue());
    println!("{}", "=".repeat(40).dimmed());

    for route in table.routes() {
        let target = match route.target {
            RouteTarget::Page(page) => page.title().green().to_string(),
            RouteTarget::Redirect(to) => format!("redirect to {}", to).yellow().to_string(),
        };
        let layout = if route.layout { "layout".normal() } else { "standalone".dimmed() };
        println!("  {:<12} {:<24} {}", route.path.bold(), target, layout);
    }
    println!("  {:<12} {:<24} {}", "*".bold(), "Page Not Found".red(), "standalone".dimmed());

    let links: Vec<&str> = NAV_LINKS.iter().map(|p| p.title()).collect();
    println!("\n{} {}", "Header links:".dimmed(), links.join(", "));
}

fn print_resolution(path: &str) {
    let resolution = RouteTable::new().resolve(path);

    println!("{} {}", "Requested:".dimmed(), resolution.requested);
    if let Some(from) = &resolution.redirected_from {
        println!("{} {} -> {}", "Redirect:".dimmed(), from, resolution.path);
    }
    println!("{} {}", "Path:".dimmed(), resolution.path.bold());
    println!("{} {}", "Page:".dimmed(), resolution.page.title().green());
    println!(
        "{} {}",
        "Layout:".dimmed(),
        if resolution.layout { "yes" } else { "no" }
    );
}
