//! Reusable server runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the full server lifecycle:
//! store construction and seeding, metrics recorder, REST API, and graceful
//! shutdown. Both the root binary and the CLI use this.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::{ListLimits, UserService};
use crate::config::AppConfig;
use crate::create_api_router;
use crate::infrastructure::InMemoryUserRepository;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install metrics recorder: {0}")]
    Metrics(#[from] BuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Install the process-wide Prometheus recorder (default: true).
    /// Tests that start several servers in one process turn this off.
    pub install_metrics_recorder: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            install_metrics_recorder: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// # Examples
///
/// ```rust,no_run
/// use user_store::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The user service shared with every request handler.
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is listening on.
    pub local_addr: SocketAddr,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the service with the given options.
    ///
    /// This will:
    /// 1. Install (or reuse) the Prometheus metrics recorder
    /// 2. Build the user store, seeded if configured
    /// 3. Bind and serve the REST API with graceful shutdown
    pub async fn start(opts: ServerOptions) -> Result<Self, ServerError> {
        let app_cfg = opts.config;

        info!("Starting User Store Service...");

        // ── Prometheus metrics recorder ────────────────────────
        let prometheus_handle = if opts.install_metrics_recorder {
            global_prometheus_handle()?
        } else {
            PrometheusBuilder::new().build_recorder().handle()
        };

        // ── Store & Service ────────────────────────────────────
        let repo = if app_cfg.store.seed_on_startup {
            info!("📋 Sample users loaded");
            InMemoryUserRepository::with_seed_data()
        } else {
            InMemoryUserRepository::new()
        };
        let user_service = Arc::new(UserService::new(
            Arc::new(repo),
            ListLimits::from(&app_cfg.pagination),
        ));

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(user_service.clone(), prometheus_handle);

        let api_addr = app_cfg.server.address();
        let listener = tokio::net::TcpListener::bind(&api_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: api_addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Server started.");

        Ok(Self {
            user_service,
            config: app_cfg,
            local_addr,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop. After the shutdown signal, in-flight
    /// requests get `server.shutdown_timeout` seconds to drain.
    pub async fn wait(self) {
        let signal = self.shutdown.signal();
        let drain = self.shutdown.timeout();
        let mut api_task = self.api_task;

        tokio::select! {
            result = &mut api_task => {
                log_task_exit(result);
                info!("👋 User Store Service shutdown complete");
                return;
            }
            _ = signal.wait() => {}
        }

        info!("⏳ Waiting up to {}s for in-flight requests...", drain.as_secs());
        match tokio::time::timeout(drain, &mut api_task).await {
            Ok(result) => log_task_exit(result),
            Err(_) => {
                warn!("⚠️ Graceful shutdown timed out after {}s", drain.as_secs());
                api_task.abort();
            }
        }

        info!("👋 User Store Service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down User Store Service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn log_task_exit(result: Result<(), tokio::task::JoinError>) {
    match result {
        Ok(()) => info!("REST API server stopped"),
        Err(e) => error!("REST API server task panicked: {}", e),
    }
}

/// The global recorder can only be installed once per process; restarts
/// within the same process reuse it.
fn global_prometheus_handle() -> Result<PrometheusHandle, ServerError> {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = PROM_HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    info!("📊 Prometheus metrics recorder installed");
    Ok(PROM_HANDLE.get_or_init(|| handle).clone())
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
/// `RUST_LOG` overrides `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
