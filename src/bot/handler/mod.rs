use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildId, Interaction, Member, Message, Ready, UnavailableGuild,
    User,
};
use serenity::async_trait;

use crate::service::KnowledgeService;

pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub knowledge: KnowledgeService,
}

impl Handler {
    pub fn new(db: DatabaseConnection, knowledge: KnowledgeService) -> Self {
        Self { db, knowledge }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, &self.knowledge, ctx, interaction).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(ctx, incomplete, full).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(ctx, guild_id, user, member_data_if_available).await;
    }

    /// Called when a message is created in a channel the bot can see
    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(ctx, new_message).await;
    }
}
