//! Lumis API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lumis_api::api::{create_app, AppState};
use lumis_api::catalog::Catalog;
use lumis_api::config::{log_directives, Config};
use lumis_api::error::AppError;
use lumis_api::intake::{IntakeService, MongoStore, SubmissionStore};
use lumis_api::metrics;
use lumis_api::utils::{serve_then_close, shutdown_signal};

/// Lumis marketing site API.
#[derive(Parser, Debug)]
#[command(name = "lumis-api")]
#[command(about = "Contact/appointment intake and site content API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging; .env is read first so RUST_LOG may live there
    dotenvy::dotenv().ok();
    let directives = log_directives(args.verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    if args.json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Serve { port }) => cmd_serve(port.or(args.port)).await,
        None => cmd_serve(args.port).await,
    }
}

/// Load and validate configuration; any failure aborts startup.
fn load_config() -> Result<Config, AppError> {
    let config = Config::load()?;
    config.validate().map_err(AppError::InvalidConfig)?;
    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("LUMIS API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match load_config() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration check failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Database: {}", config.db_name);
    println!("  CORS Origins: {}", config.cors_origins);
    println!("  Port: {}", config.port);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = load_config().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    let origins = config.cors_origins().map_err(AppError::InvalidConfig)?;
    info!("Configuration loaded successfully");
    info!("Database: {}", config.db_name);
    info!(
        "CORS: {}",
        if origins.is_some() { config.cors_origins.as_str() } else { "any origin" }
    );

    // Metrics recorder
    let prometheus = match metrics::init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Metrics disabled: {}", e);
            None
        }
    };

    // Document store, opened once and closed on shutdown
    let store = Arc::new(
        MongoStore::connect(&config.mongo_url, &config.db_name)
            .await
            .map_err(AppError::from)?,
    );
    if let Err(e) = store.ping().await {
        warn!("MongoDB not reachable yet: {}", e);
    }

    let intake = IntakeService::new(store.clone());
    let mut app_state = AppState::new(Catalog::seeded(), intake);
    if let Some(handle) = prometheus {
        app_state = app_state.with_metrics(handle);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await.map_err(AppError::from)?;
    info!("HTTP server listening on {}", addr);

    let server = async move {
        axum::serve(listener, create_app(app_state, origins))
            .with_graceful_shutdown(shutdown_signal())
            .await
    };
    serve_then_close(server, &*store)
        .await
        .map_err(AppError::from)?;

    info!("Server stopped");

    Ok(())
}
