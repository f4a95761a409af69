use sea_orm::DbErr;

use crate::model::role::GuildRole;

/// A guild registered in the store by a platform-to-store sync.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRecord {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name at the time it was registered.
    pub guild_name: String,
}

impl GuildRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            guild_id,
            guild_name: entity.guild_name,
        })
    }
}

/// Live state of a guild read from the platform immediately before a sync.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSnapshot {
    pub guild_id: u64,
    pub name: String,
    pub roles: Vec<GuildRole>,
}

impl GuildSnapshot {
    /// Returns whether a role with this ID currently exists on the platform.
    pub fn has_role(&self, role_id: u64) -> bool {
        self.roles.iter().any(|role| role.id == role_id)
    }
}
