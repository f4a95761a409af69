//! Role and channel creation requested through webhook messages.

use serenity::{
    all::{
        ChannelType, CreateChannel, EditRole, GuildId, PermissionOverwrite,
        PermissionOverwriteType, Permissions,
    },
    http::Http,
};
use std::sync::Arc;

use crate::{error::AppError, model::provision::ProvisionRequest};

/// Creates guild roles and channels on behalf of an external integration.
pub struct ProvisionService {
    http: Arc<Http>,
}

impl ProvisionService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Creates the requested role or channel.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Announcement to post in the guild
    /// - `Ok(None)` - Created; nothing to announce
    /// - `Err(AppError)` - Discord refused or failed the creation
    pub async fn provision(
        &self,
        guild_id: GuildId,
        request: &ProvisionRequest,
    ) -> Result<Option<String>, AppError> {
        match request {
            ProvisionRequest::Role(name) => {
                let role = guild_id
                    .create_role(
                        &self.http,
                        EditRole::new()
                            .name(name.clone())
                            .permissions(provisioned_role_permissions()),
                    )
                    .await?;

                tracing::info!("Created role {} ({}) in guild {}", role.name, role.id, guild_id);

                Ok(Some(format!("Role created : {}", role.name)))
            }
            ProvisionRequest::Channel(name) => {
                let channel = guild_id
                    .create_channel(
                        &self.http,
                        CreateChannel::new(name.clone())
                            .kind(ChannelType::Text)
                            .permissions(vec![everyone_overwrite(guild_id)]),
                    )
                    .await?;

                tracing::info!(
                    "Created channel {} ({}) in guild {}",
                    channel.name,
                    channel.id,
                    guild_id
                );

                Ok(None)
            }
        }
    }
}

/// Permissions granted to a provisioned role.
pub fn provisioned_role_permissions() -> Permissions {
    Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY | Permissions::SEND_MESSAGES
}

/// `@everyone` overwrite applied to a provisioned channel.
pub fn everyone_overwrite(guild_id: GuildId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: Permissions::SEND_MESSAGES | Permissions::VIEW_CHANNEL,
        deny: Permissions::MANAGE_CHANNELS | Permissions::MANAGE_MESSAGES,
        kind: PermissionOverwriteType::Role(guild_id.everyone_role()),
    }
}
