//! Repository layer for bot state.
//!
//! Repositories wrap a `Store` keyed by Discord snowflake IDs and expose the operations
//! the services need. All state is held in memory and is lost on restart.

pub mod chore_schedule;
pub mod shopping_list;
pub mod store;
