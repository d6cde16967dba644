//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! shopping lists, chore schedules, and typed slash command invocations. Raw Discord
//! interaction data is converted into these types at the bot boundary.

pub mod chore;
pub mod command;
pub mod shopping_list;
