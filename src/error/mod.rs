//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Errors
//! never escape to the event dispatcher: command handlers catch them at the operation
//! boundary, log them and turn them into a single user-facing message.

pub mod config;
pub mod knowledge;

use thiserror::Error;

use crate::error::{config::ConfigError, knowledge::KnowledgeError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. `Forbidden` is kept
/// apart from `DiscordErr` because a permission refusal has a different remediation
/// (grant the bot a role or permission) than a transient platform failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failure reading or writing the knowledge document.
    #[error(transparent)]
    KnowledgeErr(#[from] KnowledgeError),

    /// The platform refused a permission-gated mutation.
    ///
    /// # Fields
    /// - Description of the refused operation
    #[error("Missing permissions: {0}")]
    Forbidden(String),

    /// Internal error with custom message, logged but never shown to users.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
