//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipwhere` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - One-shot lookups (CLI mode) or running the HTTP server
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use ipwhere::initialization::init_logger_with;
use ipwhere::server::{start_server, AppState};
use ipwhere::{Config, GeoLookup, GeoReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    // A one-shot lookup prints JSON on stdout; keep routine logging out of the way
    let mut log_level: LevelFilter = config.log_level.clone().into();
    if config.is_cli_mode() {
        log_level = log_level.min(LevelFilter::Warn);
    }
    init_logger_with(log_level, config.log_format.clone())
        .context("Failed to initialize logger")?;

    let Some((city_path, asn_path)) = config.resolve_database_paths() else {
        log::error!(
            "Database files not found. Please provide paths via --city-db and --asn-db flags \
             or CITY_DB_PATH and ASN_DB_PATH environment variables"
        );
        process::exit(1);
    };

    if !config.is_cli_mode() {
        log::info!("Using city database: {}", city_path.display());
        log::info!("Using ASN database: {}", asn_path.display());
    }

    let reader = match GeoReader::open(&city_path, &asn_path, config.enable_online_features) {
        Ok(reader) => Arc::new(reader),
        Err(e) => {
            if config.is_cli_mode() {
                eprintln!("Error: failed to initialize geo reader: {}", e);
            } else {
                log::error!("Failed to initialize geo reader: {}", e);
            }
            process::exit(1);
        }
    };

    if let Some(ip) = config.ip.as_deref() {
        let code = match run_cli(&reader, ip).await {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                1
            }
        };
        reader.close().await;
        process::exit(code);
    }

    for metadata in [reader.city_metadata(), reader.asn_metadata()] {
        log::info!(
            "Loaded {} ({}) from {} at {}",
            metadata.database_type,
            metadata.version,
            metadata.source,
            metadata.loaded_at_rfc3339()
        );
    }

    let state = AppState::new(reader.clone());
    let result = start_server(&config.bind_address(), state, config.headless).await;

    reader.close().await;
    result
}

/// Looks up a single address and prints it as pretty JSON.
async fn run_cli(reader: &GeoReader, ip: &str) -> Result<()> {
    let info = reader.lookup_str(ip).await?;
    let json = serde_json::to_string_pretty(&info).context("failed to serialize result")?;
    println!("{}", json);
    Ok(())
}
