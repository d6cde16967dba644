use axum::{routing::get, Router};

/// Routes served next to the bot
///
/// Only a liveness endpoint: hosting platforms that require an open port keep the
/// process alive as long as it answers.
pub fn router() -> Router {
    Router::new().route("/", get(liveness))
}

async fn liveness() -> &'static str {
    "Bot is running!"
}
