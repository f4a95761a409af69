//! Serenity implementations of the service capabilities.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponseFollowup, EditRole, GuildId,
    MessageCollector, Permissions, RoleId, UserId,
};
use serenity::async_trait;
use serenity::{http::HttpError, model::ModelError};
use std::time::Duration;

use crate::{
    error::AppError,
    model::{
        guild::GuildSnapshot,
        outcome::WaitOutcome,
        role::{GuildRole, RoleRecord},
    },
    service::capability::{GuildPlatform, MessageWaiter, Responder},
};

/// Responds to one slash command interaction.
pub struct CommandResponder<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
}

impl<'a> CommandResponder<'a> {
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction) -> Self {
        Self { ctx, command }
    }
}

#[async_trait]
impl Responder for CommandResponder<'_> {
    async fn defer(&self) -> Result<(), AppError> {
        self.command.defer(&self.ctx.http).await?;
        Ok(())
    }

    async fn followup(&self, content: &str) -> Result<(), AppError> {
        self.command
            .create_followup(
                &self.ctx.http,
                CreateInteractionResponseFollowup::new().content(content),
            )
            .await?;
        Ok(())
    }
}

/// Waits on the gateway for the next non-empty message from a user.
pub struct CollectorWaiter<'a> {
    ctx: &'a Context,
}

impl<'a> CollectorWaiter<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl MessageWaiter for CollectorWaiter<'_> {
    async fn next_message_from(
        &self,
        user_id: u64,
        timeout: Duration,
    ) -> Result<WaitOutcome, AppError> {
        let message = MessageCollector::new(&self.ctx.shard)
            .author_id(UserId::new(user_id))
            .filter(|message| !message.content.trim().is_empty())
            .timeout(timeout)
            .next()
            .await;

        Ok(match message {
            Some(message) => WaitOutcome::Received(message.content),
            None => WaitOutcome::TimedOut,
        })
    }
}

/// One guild accessed through the Discord HTTP API.
pub struct HttpGuildPlatform<'a> {
    ctx: &'a Context,
    guild_id: GuildId,
}

impl<'a> HttpGuildPlatform<'a> {
    pub fn new(ctx: &'a Context, guild_id: GuildId) -> Self {
        Self { ctx, guild_id }
    }
}

#[async_trait]
impl GuildPlatform for HttpGuildPlatform<'_> {
    async fn snapshot(&self) -> Result<GuildSnapshot, AppError> {
        let guild = self.guild_id.to_partial_guild(&self.ctx.http).await?;

        Ok(GuildSnapshot {
            guild_id: guild.id.get(),
            roles: guild.roles.values().map(GuildRole::from).collect(),
            name: guild.name,
        })
    }

    async fn apply_role(&self, role: &RoleRecord) -> Result<(), AppError> {
        let builder = EditRole::new()
            .name(role.role_name.clone())
            .permissions(Permissions::from_bits_truncate(role.role_perm));

        match self
            .guild_id
            .edit_role(&self.ctx.http, RoleId::new(role.role_id), builder)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if is_forbidden(&e) => Err(AppError::Forbidden(format!(
                "edit role {} in guild {}: {}",
                role.role_id, self.guild_id, e
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

/// Returns whether Discord refused a request for lack of permissions or role hierarchy.
pub fn is_forbidden(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 403
        }
        serenity::Error::Model(ModelError::InvalidPermissions { .. } | ModelError::Hierarchy) => {
            true
        }
        _ => false,
    }
}
