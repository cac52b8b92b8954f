use crate::components::Components;
use crate::config::Config;
use crate::error::Error;
use crate::server::{router, AppState};
use crate::shutdown;
use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Filter from `RUST_LOG` directives, falling back to the default on absent or bad input
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize logging with environment-based configuration.
///
/// `.env` is loaded first so a `RUST_LOG` kept there is honoured.
pub fn init_logging() -> miette::Result<()> {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var(EnvFilter::DEFAULT_ENV).ok()))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the configuration once; it is read-only from here on
pub fn load_config() -> miette::Result<Arc<Config>> {
    match Config::load() {
        Ok(config) => {
            info!("Using credentials: {}", config.google.credentials_path.display());
            info!("Sheet ID: {}", config.google.sheet_id);
            info!("Calendar ID: {}", config.google.calendar_id);
            Ok(Arc::new(config))
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Bind the listener and serve until a shutdown signal arrives
pub async fn start_server(config: Arc<Config>) -> miette::Result<()> {
    let components = Components::from_config(&config);
    let state = AppState::new(Arc::clone(&config), components);
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(Error::from)?;

    info!("Starting API server on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    info!("API server stopped");
    Ok(())
}
