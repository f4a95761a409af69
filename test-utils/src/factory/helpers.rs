//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild along with one persisted role per provided role ID.
///
/// Roles are named `Role {role_id}` and carry zero permissions.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_ids` - Role IDs to persist for the new guild
///
/// # Returns
/// - `Ok((guild, roles))` - The created guild and its roles in input order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_roles(
    db: &DatabaseConnection,
    role_ids: &[&str],
) -> Result<(entity::guild::Model, Vec<entity::role::Model>), DbErr> {
    let guild = crate::factory::guild::create_guild(db).await?;

    let mut roles = Vec::with_capacity(role_ids.len());
    for role_id in role_ids {
        roles.push(crate::factory::role::create_role(db, &guild.guild_id, role_id).await?);
    }

    Ok((guild, roles))
}
