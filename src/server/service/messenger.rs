//! Posting messages to Discord channels.
//!
//! Services post chore reminders and announcements through the `ChannelMessenger`
//! trait so they can be exercised without a Discord connection. A failed send means the
//! destination channel could not be reached; callers decide whether that matters.

use serenity::{
    all::{ChannelId, CreateMessage},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::error::AppError;

#[async_trait]
pub trait ChannelMessenger: Send + Sync {
    /// Posts `content` as a new message in the channel.
    async fn send(&self, channel_id: u64, content: &str) -> Result<(), AppError>;
}

/// Messenger posting through Discord's HTTP API
pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChannelMessenger for DiscordMessenger {
    async fn send(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        if channel_id == 0 {
            return Err(AppError::NotFound("Channel ID 0 does not exist".to_string()));
        }

        let message = CreateMessage::new().content(content);
        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}
