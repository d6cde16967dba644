use chrono::Weekday;
use serenity::all::ChannelType;

use crate::server::{
    error::{validation::ValidationError, AppError},
    model::{
        chore::{DestinationChannel, FireOutcome},
        command::{BotCommand, Invoker, WeeklyChoresOptions},
    },
    service::command::CommandService,
    test_utils::{chores_param, text_channel, TestContext, CHANNEL_ID, GUILD_ID, USER_ID},
};

mod chore;
