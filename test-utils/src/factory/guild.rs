//! Guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id("987654321")
///     .guild_name("CustomGuild")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    guild_name: String,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - guild_name: `"Guild {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            guild_name: format!("Guild {}", id),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the guild name.
    pub fn guild_name(mut self, guild_name: impl Into<String>) -> Self {
        self.guild_name = guild_name.into();
        self
    }

    /// Builds and inserts the guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            guild_name: ActiveValue::Set(self.guild_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}
