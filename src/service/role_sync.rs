//! Two-way role synchronization between a guild and the store.
//!
//! Platform-to-store replaces the guild's persisted role set wholesale inside one
//! transaction: the guild row is registered on first sync, otherwise the old roles
//! are deleted, then the current roles are bulk-inserted. Any failure rolls the whole
//! transaction back so a guild never ends up with a partial or empty role set.
//!
//! Store-to-platform walks the persisted roles and applies each one's name and
//! permissions to the matching live role. Roles deleted on the platform since the
//! last sync are skipped. Edits are not compensated on failure; re-running the whole
//! sync is safe because applying the same name and permissions twice changes nothing.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{GuildRepository, RoleRepository},
    error::AppError,
    model::{guild::GuildSnapshot, outcome::SyncOutcome, role::GuildRole},
    service::capability::{GuildPlatform, Responder},
};

pub struct RoleSyncService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleSyncService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one sync command end to end.
    ///
    /// Defers the response before touching the platform or the store, reads the guild,
    /// runs the requested direction and sends exactly one terminal message.
    ///
    /// # Arguments
    /// - `responder` - Response channel for the invoking command
    /// - `platform` - The guild the command was invoked in
    /// - `db_to_platform` - `true` to apply stored roles to the guild, `false` to
    ///   persist the guild's roles
    ///
    /// # Returns
    /// - `Ok(SyncOutcome)` - The outcome that was reported to the user
    /// - `Err(AppError)` - The response could not be delivered
    pub async fn sync_guild(
        &self,
        responder: &dyn Responder,
        platform: &dyn GuildPlatform,
        db_to_platform: bool,
    ) -> Result<SyncOutcome, AppError> {
        responder.defer().await?;

        let outcome = match platform.snapshot().await {
            Ok(snapshot) if db_to_platform => self.sync_to_platform(&snapshot, platform).await,
            Ok(snapshot) => {
                self.sync_to_store(snapshot.guild_id, &snapshot.name, &snapshot.roles)
                    .await
            }
            Err(e) => {
                tracing::error!("Failed to read guild before sync: {}", e);
                SyncOutcome::GuildUnavailable
            }
        };

        responder.followup(&outcome.to_string()).await?;

        Ok(outcome)
    }

    /// Persists the guild's full current role list, replacing what was stored.
    ///
    /// # Returns
    /// - `SyncOutcome::Registered` - The guild was stored for the first time
    /// - `SyncOutcome::Updated` - The guild's previous roles were replaced
    /// - `SyncOutcome::StoreFailed` - The transaction was rolled back
    pub async fn sync_to_store(
        &self,
        guild_id: u64,
        guild_name: &str,
        roles: &[GuildRole],
    ) -> SyncOutcome {
        let guild_name = guild_name.to_string();

        match self.replace_roles(guild_id, &guild_name, roles).await {
            Ok(true) => {
                tracing::info!(
                    "Registered guild {} ({}) with {} roles",
                    guild_name,
                    guild_id,
                    roles.len()
                );
                SyncOutcome::Registered { guild_name }
            }
            Ok(false) => {
                tracing::info!(
                    "Replaced roles for guild {} ({}) with {} roles",
                    guild_name,
                    guild_id,
                    roles.len()
                );
                SyncOutcome::Updated { guild_name }
            }
            Err(e) => {
                tracing::error!("Failed to sync guild {} roles to store: {}", guild_id, e);
                SyncOutcome::StoreFailed { guild_name }
            }
        }
    }

    /// Registers or clears the guild, then inserts `roles`, in one transaction.
    ///
    /// Returns whether the guild was newly registered. The transaction is rolled back
    /// on any failure.
    async fn replace_roles(
        &self,
        guild_id: u64,
        guild_name: &str,
        roles: &[GuildRole],
    ) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        match Self::write_roles(&txn, guild_id, guild_name, roles).await {
            Ok(registered) => {
                txn.commit().await?;
                Ok(registered)
            }
            Err(e) => {
                txn.rollback().await?;
                Err(e)
            }
        }
    }

    async fn write_roles(
        txn: &DatabaseTransaction,
        guild_id: u64,
        guild_name: &str,
        roles: &[GuildRole],
    ) -> Result<bool, AppError> {
        let guild_repo = GuildRepository::new(txn);
        let role_repo = RoleRepository::new(txn);

        let registered = match guild_repo.find_by_guild_id(guild_id).await? {
            None => {
                guild_repo.create(guild_id, guild_name).await?;
                true
            }
            Some(_) => {
                let removed = role_repo.delete_by_guild_id(guild_id).await?;
                tracing::debug!("Removed {} stored roles for guild {}", removed, guild_id);
                false
            }
        };

        role_repo.create_many(guild_id, roles).await?;

        Ok(registered)
    }

    /// Applies the stored roles of the snapshot's guild to the platform.
    ///
    /// # Returns
    /// - `SyncOutcome::NeverSynced` - No roles are stored; nothing was mutated
    /// - `SyncOutcome::Synced` - Every stored role still present was applied
    /// - `SyncOutcome::Forbidden` - The platform refused an edit; the loop stopped
    /// - `SyncOutcome::PlatformFailed` - Any other store or platform error
    pub async fn sync_to_platform(
        &self,
        snapshot: &GuildSnapshot,
        platform: &dyn GuildPlatform,
    ) -> SyncOutcome {
        let guild_name = snapshot.name.clone();
        let role_repo = RoleRepository::new(self.db);

        let records = match role_repo.get_by_guild_id(snapshot.guild_id).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    "Failed to read stored roles for guild {}: {}",
                    snapshot.guild_id,
                    e
                );
                return SyncOutcome::PlatformFailed { guild_name };
            }
        };

        if records.is_empty() {
            return SyncOutcome::NeverSynced { guild_name };
        }

        let mut applied = 0;
        for record in &records {
            if !snapshot.has_role(record.role_id) {
                tracing::debug!(
                    "Skipping role {} ({}) no longer present in guild {}",
                    record.role_name,
                    record.role_id,
                    snapshot.guild_id
                );
                continue;
            }

            match platform.apply_role(record).await {
                Ok(()) => applied += 1,
                Err(AppError::Forbidden(reason)) => {
                    tracing::warn!(
                        "Role sync for guild {} refused by Discord: {}",
                        snapshot.guild_id,
                        reason
                    );
                    return SyncOutcome::Forbidden { guild_name };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to apply role {} in guild {}: {}",
                        record.role_id,
                        snapshot.guild_id,
                        e
                    );
                    return SyncOutcome::PlatformFailed { guild_name };
                }
            }
        }

        tracing::info!(
            "Applied {} of {} stored roles to guild {}",
            applied,
            records.len(),
            snapshot.guild_id
        );

        SyncOutcome::Synced { guild_name }
    }
}
