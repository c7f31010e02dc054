use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workload_metrics::api::{AppState, create_router};
use workload_metrics::config::{CONFIG_FILE_NAME, ConfigLoader};

/// Serve workload metrics over HTTP.
#[derive(Debug, Parser)]
#[command(name = "workload-metrics", version, about)]
struct Cli {
    /// Directory containing engine.yaml.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configured one.
    #[arg(long, short)]
    bind: Option<String>,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

fn load_config(dir: Option<&PathBuf>) -> Result<ConfigLoader> {
    match dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("failed to load configuration from {}", dir.display())),
        None => {
            let default_dir = PathBuf::from("./config/default");
            if default_dir.join(CONFIG_FILE_NAME).exists() {
                ConfigLoader::load(&default_dir).context("failed to load default configuration")
            } else {
                Ok(ConfigLoader::default())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = load_config(cli.config.as_ref())?;
    let bind_address = cli
        .bind
        .unwrap_or_else(|| config.server().bind_address.clone());

    info!(
        standard_workday_minutes = config.standard_workday_minutes(),
        "Loaded configuration"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!(address = %bind_address, "Listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
