use serenity::all::{Context, GuildId, Member, User};

use crate::{
    error::AppError,
    service::notification::{member_joined_embed, member_left_embed, NotificationService},
};

/// Announces a new member and sends them the welcome DM.
pub async fn handle_guild_member_addition(ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id;
    let user = &new_member.user;

    tracing::info!("User {} ({}) joined guild {}", user.name, user.id, guild_id);

    let notifications = NotificationService::new(ctx.http.clone());

    if let Err(e) = notifications
        .announce(guild_id, member_joined_embed(&user.name))
        .await
    {
        tracing::warn!("Failed to announce member {} in guild {}: {}", user.id, guild_id, e);
    }

    let guild_name = match guild_name(&ctx, guild_id).await {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Failed to resolve name of guild {}: {}", guild_id, e);
            return;
        }
    };

    // Members with DMs disabled reject this
    if let Err(e) = notifications.welcome_dm(user, &guild_name).await {
        tracing::debug!("Failed to send welcome DM to {}: {}", user.id, e);
    }
}

/// Announces a member leaving.
pub async fn handle_guild_member_removal(
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    tracing::info!("User {} ({}) left guild {}", user.name, user.id, guild_id);

    let notifications = NotificationService::new(ctx.http.clone());
    if let Err(e) = notifications
        .announce(guild_id, member_left_embed(&user.name))
        .await
    {
        tracing::warn!("Failed to announce departure of {} in guild {}: {}", user.id, guild_id, e);
    }
}

async fn guild_name(ctx: &Context, guild_id: GuildId) -> Result<String, AppError> {
    if let Some(name) = guild_id.name(&ctx.cache) {
        return Ok(name);
    }

    Ok(guild_id.to_partial_guild(&ctx.http).await?.name)
}
