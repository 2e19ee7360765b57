//! User Store Service
//!
//! Reads configuration from a TOML file (`~/.config/user-store/config.toml`,
//! or the path in `USER_STORE_CONFIG`) and serves the REST API until
//! SIGINT/SIGTERM.

use tracing::{error, info};

use user_store::server::{init_tracing, ServerHandle, ServerOptions};
use user_store::{default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = default_config_path();
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    let handle = ServerHandle::start(ServerOptions {
        config,
        ..Default::default()
    })
    .await?;

    handle.install_signal_handler();
    info!("⏹️  Press Ctrl+C to stop the server");
    handle.wait().await;
    Ok(())
}
