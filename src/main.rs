//! Hilo API Server
//!
//! Serves aggregation queries over a read-only climate dataset.
//!
//! # Configuration
//!
//! Config file locations are tried in order (`~/.config/hilo/config.toml`,
//! `/etc/hilo/config.toml`, `./config.toml`); CLI flags and environment
//! variables override the file:
//! - `HILO_DATASET`: Path to the dataset file
//! - `HILO_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HILO_API_PORT`: Port to listen on (default: 8090)
//! - `HILO_LOG_LEVEL` / `HILO_LOG_FORMAT`: Logging level and pretty/json
//! - `RUST_LOG`: Full tracing filter, wins over HILO_LOG_LEVEL

use anyhow::Context;
use clap::Parser;
use hilo::api::{serve, AppState};
use hilo::climate::DateBounds;
use hilo::config::Config;
use hilo::store::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "hilo", version, about = "Climate observation query API")]
struct Args {
    /// Path to a config file (overrides the default search locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the climate dataset (SQLite file)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", hilo::config::generate_default_config());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset;
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting Hilo API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    let dataset = Arc::new(
        Dataset::open(&config.dataset.path)
            .with_context(|| format!("opening dataset {:?}", config.dataset.path))?,
    );

    // The bounds must exist before any request is served; an empty dataset
    // is a startup failure, not something to paper over per request.
    let bounds = DateBounds::resolve(&dataset).context("resolving dataset date bounds")?;

    let stations = dataset.stations()?.len();
    let measurements = dataset.measurement_count()?;
    tracing::info!(
        "Dataset covers {}..{} ({} stations, {} measurements)",
        bounds.oldest,
        bounds.newest,
        stations,
        measurements
    );

    let state = AppState::new(dataset, bounds, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Hilo API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config.
///
/// `RUST_LOG` takes precedence when set; the format switch picks between
/// the pretty development layer and JSON output.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "hilo={},tower_http=info",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
