use serenity::http::Http;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::cron::CronTriggerEngine,
    service::messenger::DiscordMessenger, state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Log filtering follows the `RUST_LOG` environment variable and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Builds the application state with a running trigger scheduler.
///
/// Starts the cron scheduler chore triggers are installed on and creates the Discord
/// HTTP client used to post reminders and announcements.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
///
/// # Returns
/// - `Ok(AppState)` - State with empty stores and a running scheduler
/// - `Err(AppError::SchedulerErr)` - Scheduler failed to start
pub async fn build_state(config: &Config) -> Result<AppState, AppError> {
    let engine = CronTriggerEngine::start().await?;
    let http = Arc::new(Http::new(&config.discord_token));

    Ok(AppState::new(
        Arc::new(engine),
        Arc::new(DiscordMessenger::new(http)),
    ))
}

/// Serves the liveness endpoint until the process exits.
///
/// # Arguments
/// - `port` - Port to listen on, on all interfaces
///
/// # Returns
/// - `Err(AppError::IoErr)` - Port could not be bound or the server failed
pub async fn serve_liveness(port: u16) -> Result<(), AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Web server running on port {}", port);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
