//! Command dispatch.
//!
//! Routes a typed `BotCommand` to the shopping list or chore schedule services and
//! builds the single reply for the invocation. Mutation confirmations and errors are only
//! visible to the invoking user; list views are public.

use chrono::Utc;

use crate::server::{
    error::AppError,
    model::{
        chore::{ChoreSchedule, ConfigureChoresParam},
        command::{Announcement, BotCommand, Invoker, Reply, WeeklyChoresOptions},
        shopping_list::{RemoveItemsResult, ShoppingList},
    },
    service::chore::ChoreScheduleService,
    state::AppState,
};

const GUILD_ONLY_MESSAGE: &str = "This command can only be used in a server.";

pub struct CommandService<'a> {
    state: &'a AppState,
}

impl<'a> CommandService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Executes a command and builds its reply.
    ///
    /// Never fails: errors are turned into a private reply carrying the error's user
    /// message.
    ///
    /// # Arguments
    /// - `invoker` - Guild and user the command was issued by
    /// - `command` - The resolved command
    ///
    /// # Returns
    /// - `Reply` - Content, visibility and an optional follow-up announcement
    pub async fn handle(&self, invoker: Invoker, command: BotCommand) -> Reply {
        match self.execute(invoker, command).await {
            Ok(reply) => reply,
            Err(err) => Reply::private(err.user_message()),
        }
    }

    async fn execute(&self, invoker: Invoker, command: BotCommand) -> Result<Reply, AppError> {
        tracing::debug!(
            "Dispatching {:?} for user {} in guild {:?}",
            command,
            invoker.user_id,
            invoker.guild_id
        );

        let reply = match command {
            BotCommand::Ping => Reply::public("Pong!"),
            BotCommand::AddHouseShopping { items } => {
                let guild_id = require_guild(&invoker)?;
                self.state.house_lists.add_items(guild_id, &items).await;

                Reply::private("✅ Added item(s) successfully into house list")
            }
            BotCommand::RemoveHouseItems { items } => {
                let guild_id = require_guild(&invoker)?;
                let result = self.state.house_lists.remove_items(guild_id, &items).await;

                Reply::private(render_removal(&result))
            }
            BotCommand::HouseShoppingList => {
                let guild_id = require_guild(&invoker)?;
                let list = self.state.house_lists.get_list(guild_id).await;

                Reply::public(render_list("House", &list))
            }
            BotCommand::AddPersonalShopping { items } => {
                self.state
                    .personal_lists
                    .add_items(invoker.user_id, &items)
                    .await;

                Reply::private("✅ Added item(s) successfully into your personal list")
            }
            BotCommand::RemovePersonalItems { items } => {
                let result = self
                    .state
                    .personal_lists
                    .remove_items(invoker.user_id, &items)
                    .await;

                Reply::private(render_removal(&result))
            }
            BotCommand::PersonalShoppingList => {
                let list = self.state.personal_lists.get_list(invoker.user_id).await;

                Reply::public(render_list("Personal", &list))
            }
            BotCommand::CreateWeeklyChores(options) => {
                let guild_id = require_guild(&invoker)?;
                let schedule = self
                    .state
                    .chores
                    .configure(configure_param(guild_id, options))
                    .await?;

                Reply::private(render_confirmation(&schedule)).with_announcement(Announcement {
                    channel_id: schedule.channel_id,
                    content: ChoreScheduleService::announcement(&schedule),
                })
            }
        };

        Ok(reply)
    }
}

fn require_guild(invoker: &Invoker) -> Result<u64, AppError> {
    invoker
        .guild_id
        .ok_or_else(|| AppError::BadRequest(GUILD_ONLY_MESSAGE.to_string()))
}

fn configure_param(guild_id: u64, options: WeeklyChoresOptions) -> ConfigureChoresParam {
    ConfigureChoresParam {
        guild_id,
        people: options.people,
        chores: options.chores,
        days: options.days,
        time: options.time,
        timezone: options.timezone,
        channel: options.channel,
    }
}

fn render_list(title: &str, list: &ShoppingList) -> String {
    if list.is_empty() {
        return format!("🛒 The {} Shopping list is empty!", title);
    }

    format!("🛒 {} Shopping List:\n- {}", title, list.items.join("\n- "))
}

fn render_removal(result: &RemoveItemsResult) -> String {
    if result.is_empty() {
        return "No items were provided.".to_string();
    }

    let mut lines = Vec::with_capacity(2);
    if !result.removed.is_empty() {
        lines.push(format!("✅ Removed: {}", result.removed.join(", ")));
    }
    if !result.not_found.is_empty() {
        lines.push(format!("⚠️ Not found: {}", result.not_found.join(", ")));
    }

    lines.join("\n")
}

fn render_confirmation(schedule: &ChoreSchedule) -> String {
    let mut content = format!(
        "✅ Weekly chores created successfully!\nChannel: <#{}>\nDays: {}\nTime: {} ({})",
        schedule.channel_id,
        schedule.describe_days(),
        schedule.time,
        schedule.timezone.name()
    );

    if let Some(next) = schedule.next_occurrence(Utc::now()) {
        content.push_str(&format!(
            "\nNext reminder: <t:{}:F> ({})",
            next.timestamp(),
            next.format("%a, %d %b %Y %H:%M UTC")
        ));
    }

    content
}
