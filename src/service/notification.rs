//! Lifecycle notifications.
//!
//! Posts an embed to a guild's first text channel when the bot joins or leaves a guild
//! and when members join or leave, and sends new members a welcome DM. Every notice is
//! best effort: a failed send is returned to the event handler, logged, and otherwise
//! ignored.

use serenity::{
    all::{ChannelId, ChannelType, CreateEmbed, CreateMessage, GuildChannel, GuildId, User},
    http::Http,
};
use std::sync::Arc;

use crate::error::AppError;

/// Service posting lifecycle notices through the Discord HTTP client.
pub struct NotificationService {
    http: Arc<Http>,
}

impl NotificationService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Posts `embed` to the first text channel of a guild, fetching its channels.
    ///
    /// # Returns
    /// - `Ok(true)` - Embed posted
    /// - `Ok(false)` - Guild has no text channel
    /// - `Err(AppError)` - Channel fetch or send failed
    pub async fn announce(&self, guild_id: GuildId, embed: CreateEmbed) -> Result<bool, AppError> {
        let channels = guild_id.channels(&self.http).await?;

        self.announce_in(channels.values(), embed).await
    }

    /// Posts `embed` to the first text channel among already-known guild channels.
    pub async fn announce_in<'c>(
        &self,
        channels: impl IntoIterator<Item = &'c GuildChannel>,
        embed: CreateEmbed,
    ) -> Result<bool, AppError> {
        let Some(channel_id) = first_text_channel(channels) else {
            return Ok(false);
        };

        channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(true)
    }

    /// Posts plain text to the first text channel of a guild.
    pub async fn say(&self, guild_id: GuildId, content: &str) -> Result<bool, AppError> {
        let channels = guild_id.channels(&self.http).await?;
        let Some(channel_id) = first_text_channel(channels.values()) else {
            return Ok(false);
        };

        channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(true)
    }

    /// Sends a new member the welcome DM for `guild_name`.
    pub async fn welcome_dm(&self, user: &User, guild_name: &str) -> Result<(), AppError> {
        let message = CreateMessage::new().content(welcome_dm_text(&user.name, guild_name));
        user.direct_message(&self.http, message).await?;

        Ok(())
    }
}

/// Picks the text channel with the lowest position, breaking ties by ID.
pub fn first_text_channel<'c>(
    channels: impl IntoIterator<Item = &'c GuildChannel>,
) -> Option<ChannelId> {
    channels
        .into_iter()
        .filter(|channel| channel.kind == ChannelType::Text)
        .min_by_key(|channel| (channel.position, channel.id))
        .map(|channel| channel.id)
}

pub fn guild_joined_embed(guild_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(guild_name)
        .description("Hello, I'm Nanna the bot!")
}

pub fn guild_left_embed(guild_name: &str) -> CreateEmbed {
    CreateEmbed::new().title(guild_name).description("Goodbye :( ")
}

pub fn member_joined_embed(member_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(member_name)
        .description("Welcome to the server! :heart:")
}

pub fn member_left_embed(member_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(member_name)
        .description("left the server. Goodbye :disappointed:")
}

pub fn welcome_dm_text(member_name: &str, guild_name: &str) -> String {
    format!(
        "**Hi {}**,\nWelcome to the {} server :wave:\nPls go through the **rules channel** and have fun!",
        member_name, guild_name
    )
}
