use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::KnowledgeService,
};

/// Builds the Discord client with the bot's gateway intents and event handler.
///
/// GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents and must be enabled in the
/// Discord Developer Portal. MESSAGE_CONTENT is required to read taught answers and
/// webhook provisioning messages.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection used by role synchronization
/// - `knowledge` - Shared knowledge store handle
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    knowledge: KnowledgeService,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, knowledge);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until the client shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
