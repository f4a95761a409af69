use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::guild::GuildRecord;

/// Repository for the `guild` table.
pub struct GuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(GuildRecord))`: Guild has been registered
    /// - `Ok(None)`: Guild was never synced to the store
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildRecord>, DbErr> {
        entity::prelude::Guild::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(GuildRecord::from_entity)
            .transpose()
    }

    /// Inserts a new guild row.
    ///
    /// Fails with a primary key violation if the guild is already registered; callers
    /// check `find_by_guild_id` first.
    pub async fn create(&self, guild_id: u64, guild_name: &str) -> Result<GuildRecord, DbErr> {
        let entity = entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            guild_name: ActiveValue::Set(guild_name.to_string()),
        }
        .insert(self.db)
        .await?;

        GuildRecord::from_entity(entity)
    }
}
