//! Role domain models.
//!
//! `GuildRole` is a role as the platform currently reports it, `RoleRecord` is a role
//! as persisted in the `roles` table. Permission bitmasks are stored as signed 64-bit
//! integers; the conversion is a bit-for-bit reinterpretation in both directions.

use sea_orm::DbErr;
use serenity::all::Role;

/// A live role read from the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    pub id: u64,
    pub name: String,
    pub permissions: u64,
}

impl From<&Role> for GuildRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
            permissions: role.permissions.bits(),
        }
    }
}

/// A persisted role row belonging to a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRecord {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role name at the time of the last platform-to-store sync.
    pub role_name: String,
    /// Permission bitmask at the time of the last platform-to-store sync.
    pub role_perm: u64,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
}

impl RoleRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(RoleRecord)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse role_id or guild_id as u64
    pub fn from_entity(entity: entity::role::Model) -> Result<Self, DbErr> {
        let role_id = entity
            .role_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role_id: {}", e)))?;

        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            role_id,
            role_name: entity.role_name,
            role_perm: entity.role_perm as u64,
            guild_id,
        })
    }
}
