//! CLI administration tool for city-explorer.
//!
//! Inspects the location cache and purges location-scoped rows without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the most recently cached locations
//! cargo run --bin admin -- locations list --limit 20
//!
//! # Look up one cache key (exact match)
//! cargo run --bin admin -- locations show "Seattle"
//!
//! # Delete every movies row attached to location 42
//! cargo run --bin admin -- purge movies 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use city_explorer::domain::entities::{Location, PurgeTable};
use city_explorer::domain::repositories::LocationRepository;
use city_explorer::infrastructure::persistence::{PgLocationRepository, Store};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::Row;
use std::time::Duration;

/// CLI tool for managing city-explorer.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect cached locations
    Locations {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Delete rows of a location-scoped table for one location id
    Purge {
        /// Table to purge (weathers, yelps, movies)
        table: PurgeTable,

        /// Location id whose rows are deleted
        location_id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Location cache subcommands.
#[derive(Subcommand)]
enum LocationAction {
    /// List the most recently cached locations
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Show the cached row for an exact search query
    Show { search_query: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let store = Store::connect(&database_url, 1, Duration::from_secs(10))
        .await
        .context("Failed to connect to database")?;
    let repo = PgLocationRepository::new(store.clone());

    match cli.command {
        Commands::Locations { action } => match action {
            LocationAction::List { limit } => list_locations(&repo, limit).await?,
            LocationAction::Show { search_query } => show_location(&repo, &search_query).await?,
        },
        Commands::Purge {
            table,
            location_id,
            yes,
        } => purge(&repo, table, location_id, yes).await?,
        Commands::Db {
            action: DbAction::Check,
        } => check_db(&store).await?,
    }

    Ok(())
}

fn print_location_row(location: &Location) {
    println!(
        "  {:<6} {:<24} {:<36} {:>10.4} {:>11.4}",
        location.id.to_string().bright_black(),
        location.search_query.cyan(),
        location.formatted_query,
        location.latitude,
        location.longitude
    );
}

/// Lists cached locations, newest first.
///
/// # Output Format
///
/// ```text
/// Cached Locations
///
///   ID     Search query             Formatted                              Latitude   Longitude
///   ---------------------------------------------------------------------------------------------
///   2      Seattle                  Seattle, WA, USA                        47.6062   -122.3321
/// ```
async fn list_locations(repo: &PgLocationRepository, limit: i64) -> Result<()> {
    println!("{}", "Cached Locations".bright_blue().bold());
    println!();

    let locations = repo
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list locations: {}", e))?;

    if locations.is_empty() {
        println!("{}", "  No locations cached yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<24} {:<36} {:>10} {:>11}",
        "ID".bright_white().bold(),
        "Search query".bright_white().bold(),
        "Formatted".bright_white().bold(),
        "Latitude".bright_white().bold(),
        "Longitude".bright_white().bold()
    );
    println!("  {}", "-".repeat(93).bright_black());

    for location in &locations {
        print_location_row(location);
    }

    println!();
    println!(
        "  Shown: {}",
        locations.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_location(repo: &PgLocationRepository, search_query: &str) -> Result<()> {
    let location = repo
        .find_by_search_query(search_query)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match location {
        Some(location) => {
            println!("{}", "Cache HIT".green().bold());
            print_location_row(&location);
        }
        None => {
            println!(
                "{} no row for {:?} (keys are matched exactly)",
                "Cache MISS".yellow().bold(),
                search_query
            );
        }
    }

    Ok(())
}

/// Purges one table's rows for a location after confirmation.
async fn purge(
    repo: &PgLocationRepository,
    table: PurgeTable,
    location_id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Purge Location Rows".bright_blue().bold());
    println!();
    println!("  Table:       {}", table.to_string().cyan());
    println!("  Location ID: {}", location_id.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete all {table} rows for location {location_id}?"
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete_by_location_id(table, location_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge {}: {}", table, e))?;

    println!(
        "{} {} row(s) deleted",
        "Done:".green().bold(),
        deleted.to_string().bright_white().bold()
    );

    Ok(())
}

async fn check_db(store: &Store) -> Result<()> {
    print!("Checking database connection... ");

    let rows = store
        .execute("SELECT version() AS version", &[])
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let version: String = rows
        .first()
        .context("SELECT version() returned no rows")?
        .try_get("version")?;

    println!("{}", "OK".green().bold());
    println!("  {}", version.bright_black());

    Ok(())
}
