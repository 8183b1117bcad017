//! Parcel CLI
//!
//! Local front end for courier detection and mocked tracking lookups.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use parcel::{
    error::Result,
    models::{Config, CourierRecord, Language, TrackingDatabase},
    services::{CourierResolver, TrackingOutcome, TrackingResult, TrackingService},
};

/// Parcel - courier detection and shipment tracking
#[derive(Parser, Debug)]
#[command(name = "parcel", version, about = "Courier detection and shipment tracking")]
struct Cli {
    /// Directory containing config.toml and the JSON fixtures
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Message language (EN or ID), overrides config
    #[arg(short, long)]
    language: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up tracking history for an AWB
    Track {
        /// Airway bill number
        awb: String,
    },

    /// Identify the courier for an AWB without a tracking lookup
    Detect {
        /// Airway bill number
        awb: String,

        /// Courier name to fall back on when no pattern matches
        #[arg(long)]
        hint: Option<String>,
    },

    /// List known couriers in resolution order
    Couriers,

    /// Validate configuration and reference data
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn load_resolver(config: &Config, data_dir: &Path) -> Result<CourierResolver> {
    let path = config.couriers_path(data_dir);
    let resolver = CourierResolver::load(&path)?;
    log::info!("Loaded {} couriers from {}", resolver.len(), path.display());
    Ok(resolver)
}

fn print_courier(courier: &CourierRecord) {
    println!("Courier: {} ({})", courier.name, courier.code);
    if let Some(phone) = &courier.phone {
        println!("  Phone: {phone}");
    }
    if let Some(email) = &courier.email {
        println!("  Email: {email}");
    }
    if let Some(link) = &courier.link {
        println!("  Web:   {link}");
    }
}

fn print_result(result: &TrackingResult, unidentified: &str) {
    let data = &result.data;
    println!("Airwaybill Number: {}", result.awb);
    let mark = if data.is_delivered() { " ✓" } else { "" };
    println!("Status:            {}{mark}", data.status);
    println!("Courier:           {}", result.courier_name());
    if let Some(service) = &data.service {
        println!("Service:           {service}");
    }
    if let Some(destination) = &data.destination {
        println!("Destination:       {destination}");
    }
    if let Some(eta) = &data.estimated_delivery {
        println!("Estimated:         {eta}");
    }

    match &result.courier {
        Some(courier) => print_courier(courier),
        None => println!("{unidentified}"),
    }

    println!("History:");
    for item in data.history.iter().rev() {
        let date = item
            .timestamp()
            .map(|ts| ts.format("%d %b %Y %H:%M").to_string())
            .unwrap_or_else(|| item.date.clone());
        println!("  {date}  {:<20} {}", item.location, item.status);
    }
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.data_dir.join("config.toml");
    let mut config = Config::load_or_default(&config_path);
    init_logging(cli.verbose, &config.logging.level);

    if let Some(language) = cli.language {
        config.language = language;
    }

    log::debug!("Using data directory {}", cli.data_dir.display());

    match cli.command {
        Command::Track { awb } => {
            let resolver = load_resolver(&config, &cli.data_dir)?;
            let database = TrackingDatabase::load(config.tracking_path(&cli.data_dir))?;
            log::info!("Loaded {} tracked shipments", database.len());

            let service = TrackingService::new(resolver, database, config.language);
            let messages = service.language().messages();

            match service.lookup(&awb) {
                Ok(TrackingOutcome::Found(result)) => {
                    print_result(&result, messages.unidentified_courier)
                }
                Ok(outcome) => {
                    if let Some(message) = service.message(&outcome) {
                        println!("{message}");
                    }
                }
                Err(e) => {
                    log::error!("{}", service.error_message(&e));
                    return Err(e);
                }
            }
        }

        Command::Detect { awb, hint } => {
            let resolver = load_resolver(&config, &cli.data_dir)?;
            match resolver.resolve(&awb, hint.as_deref()) {
                Some(courier) => print_courier(courier),
                None => println!("{}", config.language.messages().unidentified_courier),
            }
        }

        Command::Couriers => {
            let resolver = load_resolver(&config, &cli.data_dir)?;
            for courier in resolver.couriers() {
                println!("{:<10} {:<24} {}", courier.code, courier.name, courier.awb_pattern);
            }
            for courier in resolver.invalid_patterns() {
                log::warn!("Pattern for '{}' never matches: {}", courier.name, courier.awb_pattern);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");

            let resolver = load_resolver(&config, &cli.data_dir)?;
            let invalid = resolver.invalid_patterns().count();
            log::info!(
                "✓ Couriers OK ({} entries, {} unusable patterns)",
                resolver.len(),
                invalid
            );

            let database = TrackingDatabase::load(config.tracking_path(&cli.data_dir))?;
            log::info!("✓ Tracking data OK ({} shipments)", database.len());

            log::info!("All validations passed!");
        }
    }

    Ok(())
}
