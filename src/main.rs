mod server;

use crate::server::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = startup::build_state(&config).await?;

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_liveness(port).await {
            tracing::error!("Web server error: {}", e);
        }
    });

    let client = bot::start::init_bot(&config, state).await?;

    if let Err(e) = bot::start::start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
