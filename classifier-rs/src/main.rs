//! classifier-rs: Spam Classifier Server
//!
//! Seeds the model with the built-in dataset and serves the HTTP API.

use clap::Parser;
use classifier_rs::api::ApiServer;
use classifier_rs::config::Config;
use classifier_rs::spam::SpamManager;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "classifier-rs", version, about = "Spam classifier web service")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind host
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_logging(&config);

    info!("Starting classifier-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("  Listening on: {}", config.listen_addr());
    info!("  Max features: {}", config.model.max_features);

    let manager = SpamManager::new(config.model.clone());
    manager.seed().await?;

    let server = ApiServer::new(manager, config.listen_addr());
    server.run().await?;

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None if Path::new("config.toml").exists() => Config::from_file(Path::new("config.toml"))?,
        None => Config::default(),
    };

    config.apply_env()?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.debug {
        config.server.debug = true;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(config: &Config) {
    let level = if config.server.debug {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("classifier_rs={level},tower_http={level}").into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
