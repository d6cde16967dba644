//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the global slash commands

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::server::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the full slash command set globally, replacing whatever was registered
/// before. A failed registration is logged; previously registered commands keep working.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Keeping the house in order")));

    match Command::set_global_commands(&ctx.http, commands::all()).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
