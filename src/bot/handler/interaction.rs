use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::{
    bot::command::{ask_me, ping, sync_guild},
    error::AppError,
    service::KnowledgeService,
};

/// Routes slash commands to their handlers.
///
/// Errors from a command are logged here and never reach the event dispatcher.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    knowledge: &KnowledgeService,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::info!(
        "Received /{} from user {} in guild {:?}",
        command.data.name,
        command.user.id,
        command.guild_id
    );

    let result = match command.data.name.as_str() {
        ping::NAME => ping::run(&ctx, &command).await,
        sync_guild::NAME => sync_guild::run(db, &ctx, &command).await,
        ask_me::NAME => ask_me::run(knowledge, &ctx, &command).await,
        _ => respond(&ctx, &command, "Invalid command").await,
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle /{}: {}", command.data.name, e);
    }
}

/// Sends an immediate ephemeral reply.
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}
