//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles belonging to an existing guild.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::role::RoleFactory;
///
/// let role = RoleFactory::new(&db, &guild.guild_id)
///     .role_id("111111111")
///     .role_name("Admin")
///     .role_perm(8)
///     .build()
///     .await?;
/// ```
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    role_id: String,
    role_name: String,
    role_perm: i64,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - role_id: `"{id}"` where id is auto-incremented
    /// - role_name: `"Role {id}"`
    /// - role_perm: `0`
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.to_string(),
            role_id: id.to_string(),
            role_name: format!("Role {}", id),
            role_perm: 0,
        }
    }

    /// Sets the role ID.
    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    /// Sets the role name.
    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self
    }

    /// Sets the role permission bitmask.
    pub fn role_perm(mut self, role_perm: i64) -> Self {
        self.role_perm = role_perm;
        self
    }

    /// Builds and inserts the role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            role_id: ActiveValue::Set(self.role_id),
            role_name: ActiveValue::Set(self.role_name),
            role_perm: ActiveValue::Set(self.role_perm),
            guild_id: ActiveValue::Set(self.guild_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with the given ID and default name/permissions.
pub async fn create_role(
    db: &DatabaseConnection,
    guild_id: &str,
    role_id: &str,
) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db, guild_id).role_id(role_id).build().await
}
