//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! bot (Discord) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Normalizing items, validating schedules, rotating chores
//! - **Orchestration**: Coordinating repositories with triggers and channel messages
//! - **Dispatch**: Turning a typed command into exactly one reply

pub mod chore;
pub mod command;
pub mod messenger;
pub mod shopping_list;

#[cfg(test)]
mod test;
