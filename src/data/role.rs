//! Role repository for the `roles` table.
//!
//! A guild's role rows are only ever replaced wholesale: `delete_by_guild_id`
//! followed by `create_many`, inside one transaction owned by the caller.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::role::{GuildRole, RoleRecord};

/// Repository for persisted guild roles.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    /// Pool or transaction used to execute queries.
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new repository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all persisted roles for a guild.
    ///
    /// # Returns
    /// - `Ok(Vec<RoleRecord>)` - Roles recorded by the last platform-to-store sync
    /// - `Err(DbErr)` - Database error during query, or a stored ID failed to parse
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<RoleRecord>, DbErr> {
        let entities = entity::prelude::Role::find()
            .filter(entity::role::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        entities.into_iter().map(RoleRecord::from_entity).collect()
    }

    /// Deletes every role recorded for a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_by_guild_id(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Role::delete_many()
            .filter(entity::role::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Bulk-inserts roles for a guild in a single statement.
    ///
    /// An empty slice is a no-op. A role ID appearing twice violates the
    /// `(role_id, guild_id)` key and fails the whole insert.
    pub async fn create_many(&self, guild_id: u64, roles: &[GuildRole]) -> Result<(), DbErr> {
        if roles.is_empty() {
            return Ok(());
        }

        let models = roles.iter().map(|role| entity::role::ActiveModel {
            role_id: ActiveValue::Set(role.id.to_string()),
            role_name: ActiveValue::Set(role.name.clone()),
            role_perm: ActiveValue::Set(role.permissions as i64),
            guild_id: ActiveValue::Set(guild_id.to_string()),
        });

        entity::prelude::Role::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
