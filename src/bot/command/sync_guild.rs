use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::{
        capability::{CommandResponder, HttpGuildPlatform},
        command::bool_option,
        handler::interaction::respond,
    },
    error::AppError,
    service::RoleSyncService,
};

pub const NAME: &str = "sync_guild";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(
            "Sync the guild details from database to discord or vice versa. Default is discord to database",
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "db_to_dc",
                "Apply the stored roles to this server instead of storing its roles",
            )
            .required(false),
        )
}

pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond(ctx, command, "This command can only be used in a server").await;
    };

    let db_to_platform = bool_option(command, "db_to_dc").unwrap_or(false);

    let responder = CommandResponder::new(ctx, command);
    let platform = HttpGuildPlatform::new(ctx, guild_id);

    let outcome = RoleSyncService::new(db)
        .sync_guild(&responder, &platform, db_to_platform)
        .await?;

    tracing::info!("Sync of guild {} finished: {:?}", guild_id, outcome);

    Ok(())
}
