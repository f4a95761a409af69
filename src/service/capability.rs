//! Platform capabilities the core flows depend on.
//!
//! Each trait is the narrow slice of the platform one flow needs. The Discord
//! implementations live in `bot::capability`; tests use recording fakes.

use serenity::async_trait;
use std::time::Duration;

use crate::{
    error::AppError,
    model::{guild::GuildSnapshot, outcome::WaitOutcome, role::RoleRecord},
};

/// Sends user-visible responses for one inbound command.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Acknowledges the command so later replies may take longer than the
    /// platform's immediate-response window.
    async fn defer(&self) -> Result<(), AppError>;

    /// Sends a message after `defer`.
    async fn followup(&self, content: &str) -> Result<(), AppError>;
}

/// Waits for the next message authored by a specific user.
#[async_trait]
pub trait MessageWaiter: Send + Sync {
    /// Resolves with the message content, or `TimedOut` once `timeout` elapses.
    async fn next_message_from(
        &self,
        user_id: u64,
        timeout: Duration,
    ) -> Result<WaitOutcome, AppError>;
}

/// Read and role-edit access to one guild on the platform.
#[async_trait]
pub trait GuildPlatform: Send + Sync {
    /// Reads the guild's current name and full role list.
    async fn snapshot(&self) -> Result<GuildSnapshot, AppError>;

    /// Renames and re-permissions a live role to match a persisted record.
    ///
    /// Returns `AppError::Forbidden` when the platform refuses the edit.
    async fn apply_role(&self, role: &RoleRecord) -> Result<(), AppError>;
}
