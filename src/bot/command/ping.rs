use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse,
};
use std::time::{Duration, Instant};

use crate::error::AppError;

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Check that the bot is alive and how fast it responds")
}

/// Replies immediately, then edits the reply with the measured round-trip latency.
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let started = Instant::now();

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content("Pong!"),
            ),
        )
        .await?;

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(pong_message(started.elapsed())),
        )
        .await?;

    Ok(())
}

pub fn pong_message(latency: Duration) -> String {
    format!("Pong! {}ms", latency.as_millis())
}
