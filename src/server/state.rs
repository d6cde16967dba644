//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds every service the bot needs to
//! answer commands. The state is initialized once during startup, handed to the Discord
//! event handler, and cloned cheaply since every field shares its storage through `Arc`.
//!
//! The state includes:
//! - House shopping lists keyed by guild ID
//! - Personal shopping lists keyed by user ID
//! - Chore schedules keyed by guild ID, with their recurring triggers
//! - Channel messenger for posting follow-up announcements

use std::sync::Arc;

use crate::server::{
    data::{chore_schedule::ChoreScheduleRepository, shopping_list::ShoppingListRepository},
    scheduler::TriggerEngine,
    service::{
        chore::ChoreScheduleService, messenger::ChannelMessenger,
        shopping_list::ShoppingListService,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// Shared lists, one per guild
    pub house_lists: ShoppingListService,

    /// Personal lists, one per user across all guilds
    pub personal_lists: ShoppingListService,

    pub chores: ChoreScheduleService,

    /// Used to post announcements after an interaction has been answered
    pub messenger: Arc<dyn ChannelMessenger>,
}

impl AppState {
    /// Creates application state with empty in-memory stores.
    ///
    /// # Arguments
    /// - `engine` - Trigger engine chore schedules install their triggers on
    /// - `messenger` - Messenger used for reminders and announcements
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(engine: Arc<dyn TriggerEngine>, messenger: Arc<dyn ChannelMessenger>) -> Self {
        Self {
            house_lists: ShoppingListService::new(ShoppingListRepository::in_memory()),
            personal_lists: ShoppingListService::new(ShoppingListRepository::in_memory()),
            chores: ChoreScheduleService::new(
                ChoreScheduleRepository::in_memory(),
                engine,
                messenger.clone(),
            ),
            messenger,
        }
    }
}
