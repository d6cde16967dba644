//! Discord bot integration for shopping lists and chore schedules.
//!
//! This module connects the bot to Discord's gateway, registers its slash commands and
//! turns inbound interactions into typed commands for the service layer. The bot runs
//! until the gateway connection shuts down.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent. Slash command interactions are delivered
//! regardless of intents, and `GUILDS` provides the guild removal events used to clear
//! chore schedules of guilds the bot was removed from.

pub mod commands;
pub mod handler;
pub mod start;
