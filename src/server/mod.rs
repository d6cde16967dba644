//! Bot backend and business logic.
//!
//! This module contains the complete implementation of the house bot: shared and
//! personal shopping lists plus a weekly chore scheduler with rotating assignments, all
//! driven by Discord slash commands. All state is kept in memory for the lifetime of
//! the process.
//!
//! # Architecture
//!
//! The bot follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers, command registration, and conversion
//!   of interactions into typed commands
//! - **Service Layer** (`service/`) - Command dispatch, shopping lists, and chore schedules
//! - **Data Layer** (`data/`) - Store abstraction and repositories keyed by guild or user
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and user-facing messages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (services, messenger)
//! - **Startup** (`startup`) - Tracing, scheduler, and liveness server initialization
//! - **Router** (`router`) - Liveness endpoint
//! - **Scheduler** (`scheduler/`) - Recurring weekly triggers for chore reminders
//!
//! # Command Flow
//!
//! 1. **Bot** receives the interaction and resolves it into a `BotCommand`
//! 2. **Service** validates input, mutates stores, and installs or cancels triggers
//! 3. **Bot** sends exactly one reply, then posts any follow-up announcement
//!
//! Chore reminders take a separate path: a trigger fires, the chore service reads the
//! current schedule, posts the assignments, and advances the rotation.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod test_utils;
