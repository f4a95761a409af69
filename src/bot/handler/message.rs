use serenity::all::{Context, Message};

use crate::{
    model::provision::ProvisionRequest,
    service::{NotificationService, ProvisionService},
};

/// Handles webhook provisioning messages.
///
/// Only messages posted by a webhook inside a guild are considered; anything that is
/// not a well-formed `role|<name>` or `channel|<name>` instruction is ignored.
pub async fn handle_message(ctx: Context, message: Message) {
    if message.author.id == ctx.cache.current_user().id {
        return;
    }

    if message.webhook_id.is_none() {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some(request) = ProvisionRequest::parse(&message.content) else {
        tracing::debug!("Ignoring webhook message in guild {}", guild_id);
        return;
    };

    let provision = ProvisionService::new(ctx.http.clone());
    let announcement = match provision.provision(guild_id, &request).await {
        Ok(announcement) => announcement,
        Err(e) => {
            tracing::error!("Failed to provision {:?} in guild {}: {}", request, guild_id, e);
            return;
        }
    };

    if let Some(announcement) = announcement {
        let notifications = NotificationService::new(ctx.http.clone());
        if let Err(e) = notifications.say(guild_id, &announcement).await {
            tracing::warn!("Failed to announce provisioning in guild {}: {}", guild_id, e);
        }
    }
}
