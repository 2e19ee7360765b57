//! User Store Service CLI
//!
//! Runs the in-memory user API as a standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/user-store/config.toml)
//! user-store
//!
//! # Custom config path
//! user-store --config /etc/user-store/config.toml
//!
//! # Override the listen address and start with an empty store
//! user-store --host 127.0.0.1 --port 8080 --no-seed
//!
//! # Validate config without starting
//! user-store --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use user_store::config::{AppConfig, CONFIG_ENV_VAR};
use user_store::server::{init_tracing, ServerHandle, ServerOptions};

/// In-memory user store with a JSON REST API.
#[derive(Parser, Debug)]
#[command(
    name = "user-store",
    version,
    about = "In-memory user CRUD service",
    long_about = "User Store Service: REST API over an in-memory collection of user records.\n\n\
                  Default config: ~/.config/user-store/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Start with an empty store instead of the sample users.
    #[arg(long)]
    no_seed: bool,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_seed {
            config.store.seed_on_startup = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(user_store::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            if cli.check {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            (AppConfig::default(), Some(e))
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    cli.apply_overrides(&mut config);
    config.validate()?;

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Seed data   : {}", config.store.seed_on_startup);
        println!(
            "   Pagination  : default {}, max {}",
            config.pagination.default_per_page, config.pagination.max_per_page
        );
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
        None => info!("Configuration loaded from {}", config_path.display()),
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        ..Default::default()
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}
