//! Guild removal handler.
//!
//! Discord sends `guild_delete` both when the bot is removed from a guild and when a
//! guild becomes temporarily unavailable during an outage. Only an actual removal clears
//! the guild's chore schedule, so reminders stop being posted to a guild the bot is no
//! longer part of.

use serenity::all::{Context, Guild, UnavailableGuild};

use crate::server::state::AppState;

pub async fn handle_guild_delete(
    state: &AppState,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    if incomplete.unavailable {
        tracing::debug!("Guild {} became unavailable, keeping its schedule", guild_id);
        return;
    }

    if state.chores.clear(guild_id).await {
        tracing::info!("Removed from guild {}, chore schedule cleared", guild_id);
    }
}
