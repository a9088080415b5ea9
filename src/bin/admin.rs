//! CLI administration tool for PawConnect.
//!
//! Inspects a seed document offline: validation, shelter search, slot
//! calendars, the region picker, and password digests for new accounts.
//!
//! # Usage
//!
//! ```bash
//! # Validate the seed (SEED_PATH or the embedded document)
//! cargo run --bin admin -- seed check
//!
//! # Search shelters the way the list screen does
//! cargo run --bin admin -- shelters --query 해피 --filter walk
//!
//! # Slots of one shelter grouped by date
//! cargo run --bin admin -- schedule 1
//!
//! # Walk through the province/district picker
//! cargo run --bin admin -- region pick
//!
//! # Digest for an account's `password_sha256`
//! cargo run --bin admin -- hash-password
//! ```
//!
//! # Environment Variables
//!
//! - `SEED_PATH` (optional): seed document to inspect instead of the embedded one

use pawconnect::application::services::auth_service::password_digest;
use pawconnect::domain::entities::ApplicationStatus;
use pawconnect::domain::region_picker::{Location, RegionPicker};
use pawconnect::domain::schedule::group_by_date;
use pawconnect::domain::search::{ShelterFilter, filter_by_query};
use pawconnect::infrastructure::seed::SeedData;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Password, Select};
use std::sync::Arc;

/// CLI tool for inspecting PawConnect seed data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed document (overrides SEED_PATH)
    #[arg(long, global = true)]
    seed: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Seed document operations
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },

    /// Search shelters by name or address
    Shelters {
        /// Search text; empty lists every shelter
        #[arg(short, long, default_value = "")]
        query: String,

        /// Filter chip: all, today, walk, bath, clean
        #[arg(short, long, default_value_t = ShelterFilter::All)]
        filter: ShelterFilter,
    },

    /// Show a shelter's volunteer slots grouped by date
    Schedule {
        /// Shelter id
        shelter_id: String,
    },

    /// Region picker
    Region {
        #[command(subcommand)]
        action: RegionAction,
    },

    /// Print the SHA-256 digest of a password
    HashPassword,
}

#[derive(Subcommand)]
enum SeedAction {
    /// Validate the seed and print record counts
    Check,
}

#[derive(Subcommand)]
enum RegionAction {
    /// Choose a province, then a district
    Pick,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let seed_path = cli
        .seed
        .or_else(|| std::env::var("SEED_PATH").ok())
        .filter(|p| !p.trim().is_empty());

    let seed_path = seed_path.as_deref();

    match cli.command {
        Commands::Seed {
            action: SeedAction::Check,
        } => seed_check(&load_seed(seed_path)?, seed_path),
        Commands::Shelters { query, filter } => {
            list_shelters(&load_seed(seed_path)?, &query, filter)
        }
        Commands::Schedule { shelter_id } => show_schedule(&load_seed(seed_path)?, &shelter_id),
        Commands::Region {
            action: RegionAction::Pick,
        } => pick_region(&load_seed(seed_path)?),
        Commands::HashPassword => hash_password(),
    }
}

fn load_seed(path: Option<&str>) -> Result<SeedData> {
    SeedData::load(path).context("Failed to load seed data")
}

/// Prints record counts of a seed that passed validation.
fn seed_check(seed: &SeedData, path: Option<&str>) -> Result<()> {
    println!("{}", "🌱 Seed Check".bright_blue().bold());
    println!();
    println!("  Source: {}", path.unwrap_or("embedded").cyan());
    println!();

    let pending = seed
        .applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Pending)
        .count();

    let rows = [
        ("Provinces", seed.regions.len()),
        ("Shelters", seed.shelters.len()),
        ("Animals", seed.animals.len()),
        ("Slots", seed.slots.len()),
        ("Applications", seed.applications.len()),
        ("  pending", pending),
        ("Posts", seed.posts.len()),
        ("Accounts", seed.accounts.len()),
    ];

    for (name, count) in rows {
        println!(
            "  {:<14} {}",
            name.bright_white(),
            count.to_string().bright_white().bold()
        );
    }

    println!();
    println!("{}", "✅ Seed is valid".green().bold());
    Ok(())
}

/// Runs the list screen's search: text query first, then the filter chip.
fn list_shelters(seed: &SeedData, query: &str, filter: ShelterFilter) -> Result<()> {
    println!(
        "{} {} / {}",
        "🔎 Shelters".bright_blue().bold(),
        format!("\"{query}\"").cyan(),
        filter.label().cyan()
    );
    println!();

    let matched = filter_by_query(&seed.shelters, query);
    let shelters = filter.apply(matched, &seed.slots);

    if shelters.is_empty() {
        println!("{}", "  검색 결과가 없습니다".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<24} {:<10} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Today".bright_white().bold(),
        "Address".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for shelter in &shelters {
        let today = match shelter.today_slots {
            Some(n) if n > 0 => format!("{n}").green(),
            _ => "-".bright_black(),
        };

        println!(
            "  {:<4} {:<24} {:<10} {}",
            shelter.id.bright_black(),
            shelter.name.cyan(),
            today,
            shelter.address
        );
    }

    println!();
    println!(
        "  Total: {}",
        shelters.len().to_string().bright_white().bold()
    );
    Ok(())
}

/// Prints one badge per date with the slots underneath.
fn show_schedule(seed: &SeedData, shelter_id: &str) -> Result<()> {
    let shelter = seed
        .shelters
        .iter()
        .find(|s| s.id == shelter_id)
        .with_context(|| format!("Shelter '{shelter_id}' not found"))?;

    println!(
        "{} {}",
        "📅 Schedule".bright_blue().bold(),
        shelter.name.cyan()
    );
    println!();

    let slots = seed
        .slots
        .iter()
        .filter(|s| s.shelter_id == shelter_id)
        .cloned();
    let groups = group_by_date(slots);

    if groups.is_empty() {
        println!("{}", "  등록된 봉사 일정이 없습니다".yellow());
        return Ok(());
    }

    for group in &groups {
        println!("  {}", group.label().bright_white().bold());
        for slot in &group.slots {
            let seats = format!("{}/{}", slot.current_applicants, slot.capacity);
            let seats = if slot.is_full() {
                seats.red()
            } else {
                seats.green()
            };

            println!(
                "    {:<14} {:<4} {:<6} {}",
                slot.time_range(),
                slot.slot_type.label(),
                seats,
                slot.description.bright_black()
            );
        }
    }
    Ok(())
}

/// Interactive province then district selection.
fn pick_region(seed: &SeedData) -> Result<()> {
    println!("{}", "📍 Region Picker".bright_blue().bold());
    println!();

    let regions = Arc::new(seed.regions.clone());
    let first = regions
        .regions()
        .first()
        .context("Region map is empty")?;
    let start = Location {
        province: first.province.clone(),
        district: first
            .districts
            .first()
            .context("First province has no districts")?
            .clone(),
    };
    let mut picker = RegionPicker::new(regions.clone(), start)?;

    let provinces: Vec<&str> = regions.provinces().collect();
    let index = Select::new()
        .with_prompt("시/도")
        .items(&provinces)
        .default(0)
        .interact()?;
    let districts = picker.select_province(provinces[index])?.to_vec();

    let index = Select::new()
        .with_prompt("시/군/구")
        .items(&districts)
        .default(0)
        .interact()?;
    let location = picker.select_district(&districts[index])?;

    println!();
    println!(
        "{} {}",
        "✅ Location:".green().bold(),
        location.to_string().bright_white().bold()
    );
    Ok(())
}

/// Prompts for a password and prints the digest stored in the seed.
fn hash_password() -> Result<()> {
    println!("{}", "🔑 Password Digest".bright_blue().bold());
    println!();

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    println!();
    println!(
        "  password_sha256: {}",
        password_digest(&password).bright_yellow().bold()
    );
    println!();
    Ok(())
}
