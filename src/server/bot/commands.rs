//! Slash command definitions registered with Discord.

use serenity::all::{ChannelType, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::model::command::{
    ADD_HOUSE_SHOPPING, ADD_PERSONAL_SHOPPING, CREATE_WEEKLY_CHORES, HOUSE_SHOPPING_LIST,
    OPTION_CHANNEL, OPTION_CHORES, OPTION_DAYS, OPTION_ITEM, OPTION_PEOPLE, OPTION_TIME,
    OPTION_TIMEZONE, PERSONAL_SHOPPING_LIST, PING, REMOVE_HOUSE_ITEMS, REMOVE_PERSONAL_ITEMS,
};

/// Channel types accepted as a chore reminder destination
const REMINDER_CHANNEL_TYPES: [ChannelType; 5] = [
    ChannelType::Text,
    ChannelType::News,
    ChannelType::PublicThread,
    ChannelType::PrivateThread,
    ChannelType::NewsThread,
];

/// Every slash command the bot handles
pub fn all() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(PING).description("Replies with Pong!"),
        CreateCommand::new(ADD_HOUSE_SHOPPING)
            .description("Add item(s) to the house shopping list (comma separated)")
            .add_option(item_option("Item(s) to add, separated by commas")),
        CreateCommand::new(REMOVE_HOUSE_ITEMS)
            .description("Remove item(s) from the house shopping list (comma separated)")
            .add_option(item_option("Item(s) to remove, separated by commas")),
        CreateCommand::new(HOUSE_SHOPPING_LIST).description("View the house shopping list"),
        CreateCommand::new(ADD_PERSONAL_SHOPPING)
            .description("Add item(s) to your personal shopping list (comma separated)")
            .add_option(item_option("Item(s) to add, separated by commas")),
        CreateCommand::new(REMOVE_PERSONAL_ITEMS)
            .description("Remove item(s) from your personal shopping list (comma separated)")
            .add_option(item_option("Item(s) to remove, separated by commas")),
        CreateCommand::new(PERSONAL_SHOPPING_LIST)
            .description("View your personal shopping list"),
        CreateCommand::new(CREATE_WEEKLY_CHORES)
            .description("Set up a weekly chores schedule")
            .add_option(string_option(OPTION_PEOPLE, "Comma-separated list of people"))
            .add_option(string_option(OPTION_CHORES, "Comma-separated list of chores"))
            .add_option(string_option(
                OPTION_DAYS,
                "Comma-separated list of days (e.g. \"monday,tuesday\") or \"every day\"",
            ))
            .add_option(string_option(OPTION_TIME, "Time in HH:MM (24h) format"))
            .add_option(string_option(
                OPTION_TIMEZONE,
                "Timezone (e.g. America/Los_Angeles)",
            ))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    OPTION_CHANNEL,
                    "Channel where reminders will be posted",
                )
                .channel_types(REMINDER_CHANNEL_TYPES.to_vec())
                .required(true),
            ),
    ]
}

fn item_option(description: &str) -> CreateCommandOption {
    string_option(OPTION_ITEM, description)
}

fn string_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(true)
}
