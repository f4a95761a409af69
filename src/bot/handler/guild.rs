use serenity::all::{Context, Guild, UnavailableGuild};

use crate::service::notification::{guild_joined_embed, guild_left_embed, NotificationService};

/// Greets a guild the bot has just joined.
///
/// `guild_create` also fires for every guild on startup and after outages; only
/// `is_new == Some(true)` is a real join.
pub async fn handle_guild_create(ctx: Context, guild: Guild, is_new: Option<bool>) {
    if is_new != Some(true) {
        tracing::debug!("Guild {} ({}) available", guild.name, guild.id);
        return;
    }

    tracing::info!("Joined guild {} ({})", guild.name, guild.id);

    let notifications = NotificationService::new(ctx.http.clone());
    match notifications
        .announce_in(guild.channels.values(), guild_joined_embed(&guild.name))
        .await
    {
        Ok(true) => {}
        Ok(false) => tracing::debug!("Guild {} has no text channel to greet in", guild.id),
        Err(e) => tracing::warn!("Failed to greet guild {}: {}", guild.id, e),
    }
}

/// Says goodbye to a guild the bot was removed from.
///
/// The bot usually cannot post after removal, so a failed send is expected and only
/// logged. Outages (`unavailable`) are not removals and are ignored.
pub async fn handle_guild_delete(ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", incomplete.id);
        return;
    }

    let Some(guild) = full else {
        tracing::info!("Removed from guild {} (not cached)", incomplete.id);
        return;
    };

    tracing::info!("Removed from guild {} ({})", guild.name, guild.id);

    let notifications = NotificationService::new(ctx.http.clone());
    if let Err(e) = notifications
        .announce_in(guild.channels.values(), guild_left_embed(&guild.name))
        .await
    {
        tracing::warn!("Could not say goodbye to guild {}: {}", guild.id, e);
    }
}
