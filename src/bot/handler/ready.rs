//! Ready event handler for bot initialization.
//!
//! Fires once per gateway connection after the handshake. Sets the bot's presence and
//! registers the global slash commands.

use serenity::all::{ActivityData, Command, Context, OnlineStatus, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// A failed command registration is logged; the bot keeps serving events with
/// whichever command definitions Discord already has.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_presence(
        Some(ActivityData::listening("/ask-me")),
        OnlineStatus::Online,
    );

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
