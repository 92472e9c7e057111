//! CLI entry point for trip-itinerary-viewer
//!
//! Provides command-line interface for listing saved trips, checking
//! a trips file for problems, and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use trip_itinerary_viewer::store::TripStore;
use trip_itinerary_viewer::ui::App;

const DEFAULT_TRIPS_FILE: &str = "~/.local/share/trip-itinerary-viewer/trips.toml";

#[derive(Parser)]
#[command(name = "trip-itinerary-viewer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all saved trips
    Show {
        /// Path to the trips file
        #[arg(short, long, default_value = DEFAULT_TRIPS_FILE)]
        trips: PathBuf,
    },

    /// Check a trips file for problems
    Check {
        /// Path to the trips file
        #[arg(short, long, default_value = DEFAULT_TRIPS_FILE)]
        trips: PathBuf,
    },

    /// Launch the GUI viewer
    Gui {
        /// Path to the trips file (omit to browse demo content)
        #[arg(short, long)]
        trips: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { trips } => show_trips(&trips)?,
        Commands::Check { trips } => check_trips(&trips)?,
        Commands::Gui { trips } => {
            let trips = trips.map(|path| expand_path(&path)).transpose()?;
            let app = App::new(trips).map_err(|e| anyhow::anyhow!(e))?;
            app.run();
        }
    }

    Ok(())
}

/// Expand tilde in a user-supplied path
fn expand_path(path: &PathBuf) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// List all saved trips in the trips file
fn show_trips(trips_path: &PathBuf) -> anyhow::Result<()> {
    let path = expand_path(trips_path)?;

    let store = TripStore::new(path.clone())?;
    let trips = store.load()?;

    println!("{}", format!("Saved trips from: {}\n", path.display()).bold());

    let total = trips.len();

    for trip in trips {
        let destination = format!("{}", trip).cyan().bold();
        let saved = trip.created_display().dimmed();

        println!("{} · saved {}", destination, saved);
        println!(
            "  {} · {} budget · {}",
            trip.transport.green(),
            trip.budget,
            trip.group_type
        );

        for (day, entry) in trip.itinerary.iter().enumerate() {
            println!("  {} {}", format!("Day {}:", day + 1).dimmed(), entry);
        }
        println!();
    }

    println!("{} Total: {} trips", "✓".green(), total);

    Ok(())
}

/// Check the trips file for consistency problems
fn check_trips(trips_path: &PathBuf) -> anyhow::Result<()> {
    let path = expand_path(trips_path)?;

    println!("{} Checking trips file: {}", "→".cyan(), path.display());

    let store = TripStore::new(path)?;
    let trips = store.load()?;

    println!("{} Found {} saved trips\n", "✓".green(), trips.len());

    let mut problem_count = 0;

    for (index, trip) in trips.iter().enumerate() {
        let issues = trip.issues();
        if issues.is_empty() {
            continue;
        }

        problem_count += issues.len();

        println!(
            "{} {}",
            format!("Trip {}", index + 1).yellow().bold(),
            format!("{}", trip).cyan()
        );
        for issue in issues {
            println!("  {} {}", "✗".red(), issue);
        }
        println!();
    }

    if problem_count == 0 {
        println!("{} {}", "✓".green().bold(), "No problems detected!".bold());
    } else {
        println!(
            "{} Found {} problem{}",
            "✗".red().bold(),
            problem_count,
            if problem_count == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }

    Ok(())
}
