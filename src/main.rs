//! HSC Study API server
//!
//! Serves the Maharashtra HSC curriculum catalog over HTTP.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use hsc_study::{
    api::start_server,
    core::{create_app_state, logging::init_tracing, AppState, Config, StorageType},
    seed::seed_catalog,
};
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = Command::new("hsc-study")
        .version(hsc_study::VERSION)
        .about("Curriculum data service for the Maharashtra HSC study browser.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("http-addr")
                .long("http-addr")
                .value_name("ADDR")
                .help("HTTP server bind address")
        )
        .arg(
            Arg::new("storage-type")
                .long("storage-type")
                .value_name("TYPE")
                .help("Storage backend type (memory, file, disabled)")
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Data directory for the file store")
        )
        .arg(
            Arg::new("database-name")
                .long("database-name")
                .value_name("NAME")
                .help("Database name reported by diagnostics")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::SetTrue)
                .help("Seed the catalog before serving")
        )
        .get_matches();

    // Load configuration: file, then environment, then CLI
    let mut config = Config::load(matches.get_one::<String>("config").map(String::as_str))?;
    apply_cli_overrides(&mut config, &matches)?;
    config.validate()?;

    init_tracing(&config.logging)?;
    info!("Starting {} v{}", hsc_study::NAME, hsc_study::VERSION);

    let state = create_app_state(config).context("Storage initialization failed")?;

    if state.config.seed.on_startup {
        seed_on_startup(&state)?;
    }

    start_server(state, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &clap::ArgMatches) -> hsc_study::Result<()> {
    if let Some(addr) = matches.get_one::<String>("http-addr") {
        config.server.http_addr = addr.parse()
            .map_err(|e| hsc_study::Error::config(format!("Invalid HTTP address: {}", e)))?;
    }

    if let Some(storage_type) = matches.get_one::<String>("storage-type") {
        config.storage.storage_type = storage_type.parse::<StorageType>()?;
    }

    if let Some(data_dir) = matches.get_one::<String>("data-dir") {
        config.storage.data_dir = data_dir.into();
    }

    if let Some(name) = matches.get_one::<String>("database-name") {
        config.storage.database_name = name.clone();
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    if matches.get_flag("seed") {
        config.seed.on_startup = true;
    }

    Ok(())
}

/// Seed the catalog before accepting requests
fn seed_on_startup(state: &AppState) -> anyhow::Result<()> {
    if !state.has_store() {
        warn!("Startup seeding skipped: storage is disabled");
        return Ok(());
    }

    let store = state.store()?;
    let report = seed_catalog(store.as_ref()).context("Startup seeding failed")?;
    info!("Startup seed created {} subjects and {} chapters", report.subjects, report.chapters);
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
    warn!("Initiating graceful shutdown...");
}
