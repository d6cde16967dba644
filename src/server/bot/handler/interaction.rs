//! Slash command interaction handler.
//!
//! Resolves the raw interaction into a `BotCommand`, hands it to the command service and
//! answers the interaction with exactly one reply. Announcements are posted only after
//! the interaction has been answered so the reply stays within Discord's response window.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction, ResolvedValue,
};

use crate::server::{
    error::AppError,
    model::{
        chore::DestinationChannel,
        command::{BotCommand, CommandOption, Invoker, Reply},
    },
    service::command::CommandService,
    state::AppState,
};

pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let invoker = Invoker {
        guild_id: command.guild_id.map(|id| id.get()),
        user_id: command.user.id.get(),
    };

    let reply = match resolve_command(&command) {
        Ok(bot_command) => CommandService::new(state).handle(invoker, bot_command).await,
        Err(e) => Reply::private(e.user_message()),
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to reply to /{} from user {}: {}",
            command.data.name,
            invoker.user_id,
            e
        );
        return;
    }

    if let Some(announcement) = reply.announcement {
        if let Err(e) = state
            .messenger
            .send(announcement.channel_id, &announcement.content)
            .await
        {
            tracing::warn!(
                "Failed to post announcement to channel {}: {}",
                announcement.channel_id,
                e
            );
        }
    }
}

/// Converts the interaction's resolved options into a typed command
fn resolve_command(command: &CommandInteraction) -> Result<BotCommand, AppError> {
    let options: Vec<CommandOption> = command
        .data
        .options()
        .into_iter()
        .filter_map(|option| match option.value {
            ResolvedValue::String(value) => Some(CommandOption::string(option.name, value)),
            ResolvedValue::Channel(channel) => Some(CommandOption::channel(
                option.name,
                DestinationChannel {
                    id: channel.id.get(),
                    kind: channel.kind,
                },
            )),
            _ => None,
        })
        .collect();

    BotCommand::parse(&command.data.name, &options)
}
