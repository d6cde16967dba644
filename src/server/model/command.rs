//! Typed slash command invocations and their replies
//!
//! Inbound interactions are resolved once at the bot boundary into a `BotCommand`, so
//! the service layer only ever sees strongly-typed arguments.

use crate::server::{error::AppError, model::chore::DestinationChannel};

pub const PING: &str = "ping";
pub const ADD_HOUSE_SHOPPING: &str = "add-house-shopping";
pub const REMOVE_HOUSE_ITEMS: &str = "remove-house-items";
pub const HOUSE_SHOPPING_LIST: &str = "house-shopping-list";
pub const ADD_PERSONAL_SHOPPING: &str = "add-personal-shopping";
pub const REMOVE_PERSONAL_ITEMS: &str = "remove-personal-items";
pub const PERSONAL_SHOPPING_LIST: &str = "personal-shopping-list";
pub const CREATE_WEEKLY_CHORES: &str = "create-weekly-chores";

pub const OPTION_ITEM: &str = "item";
pub const OPTION_PEOPLE: &str = "people";
pub const OPTION_CHORES: &str = "chores";
pub const OPTION_DAYS: &str = "days";
pub const OPTION_TIME: &str = "time";
pub const OPTION_TIMEZONE: &str = "timezone";
pub const OPTION_CHANNEL: &str = "channel";

/// Option value supplied with a command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Channel(DestinationChannel),
}

/// Named option supplied with a command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

impl CommandOption {
    pub fn string(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: OptionValue::String(value.to_string()),
        }
    }

    pub fn channel(name: &str, channel: DestinationChannel) -> Self {
        Self {
            name: name.to_string(),
            value: OptionValue::Channel(channel),
        }
    }
}

/// Raw options of the create-weekly-chores command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyChoresOptions {
    pub people: String,
    pub chores: String,
    pub days: String,
    pub time: String,
    pub timezone: String,
    pub channel: DestinationChannel,
}

/// Every command the bot understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Ping,
    AddHouseShopping { items: String },
    RemoveHouseItems { items: String },
    HouseShoppingList,
    AddPersonalShopping { items: String },
    RemovePersonalItems { items: String },
    PersonalShoppingList,
    CreateWeeklyChores(WeeklyChoresOptions),
}

impl BotCommand {
    /// Resolves a command name and its options into a typed command.
    ///
    /// # Arguments
    /// - `name` - Slash command name
    /// - `options` - Options supplied with the invocation
    ///
    /// # Returns
    /// - `Ok(BotCommand)` - Recognized command with all required options
    /// - `Err(AppError::BadRequest)` - Unknown command, or a required option is missing
    ///   or has the wrong type
    pub fn parse(name: &str, options: &[CommandOption]) -> Result<Self, AppError> {
        let command = match name {
            PING => Self::Ping,
            ADD_HOUSE_SHOPPING => Self::AddHouseShopping {
                items: string_option(options, OPTION_ITEM)?,
            },
            REMOVE_HOUSE_ITEMS => Self::RemoveHouseItems {
                items: string_option(options, OPTION_ITEM)?,
            },
            HOUSE_SHOPPING_LIST => Self::HouseShoppingList,
            ADD_PERSONAL_SHOPPING => Self::AddPersonalShopping {
                items: string_option(options, OPTION_ITEM)?,
            },
            REMOVE_PERSONAL_ITEMS => Self::RemovePersonalItems {
                items: string_option(options, OPTION_ITEM)?,
            },
            PERSONAL_SHOPPING_LIST => Self::PersonalShoppingList,
            CREATE_WEEKLY_CHORES => Self::CreateWeeklyChores(WeeklyChoresOptions {
                people: string_option(options, OPTION_PEOPLE)?,
                chores: string_option(options, OPTION_CHORES)?,
                days: string_option(options, OPTION_DAYS)?,
                time: string_option(options, OPTION_TIME)?,
                timezone: string_option(options, OPTION_TIMEZONE)?,
                channel: channel_option(options, OPTION_CHANNEL)?,
            }),
            other => return Err(AppError::BadRequest(format!("Unknown command '{}'.", other))),
        };

        Ok(command)
    }
}

fn find_option<'a>(options: &'a [CommandOption], name: &str) -> Result<&'a OptionValue, AppError> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'.", name)))
}

fn string_option(options: &[CommandOption], name: &str) -> Result<String, AppError> {
    match find_option(options, name)? {
        OptionValue::String(value) => Ok(value.clone()),
        OptionValue::Channel(_) => Err(AppError::BadRequest(format!(
            "Option '{}' must be text.",
            name
        ))),
    }
}

fn channel_option(options: &[CommandOption], name: &str) -> Result<DestinationChannel, AppError> {
    match find_option(options, name)? {
        OptionValue::Channel(channel) => Ok(*channel),
        OptionValue::String(_) => Err(AppError::BadRequest(format!(
            "Option '{}' must be a channel.",
            name
        ))),
    }
}

/// Identity of whoever issued a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invoker {
    /// Guild the command was issued in, `None` in direct messages
    pub guild_id: Option<u64>,
    pub user_id: u64,
}

/// Message posted to a channel after the interaction has been answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub channel_id: u64,
    pub content: String,
}

/// The single reply sent back for a command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only visible to the invoking user when true
    pub ephemeral: bool,
    pub announcement: Option<Announcement>,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
            announcement: None,
        }
    }

    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
            announcement: None,
        }
    }

    pub fn with_announcement(mut self, announcement: Announcement) -> Self {
        self.announcement = Some(announcement);
        self
    }
}
