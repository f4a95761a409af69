//! Tagged results of the core operations.
//!
//! Each outcome renders to exactly one terminal message through `Display`.

use std::fmt;

/// Result of a role synchronization in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// First platform-to-store sync for the guild; the guild row was created.
    Registered { guild_name: String },
    /// Platform-to-store sync replaced the guild's existing role set.
    Updated { guild_name: String },
    /// Platform-to-store sync was rolled back.
    StoreFailed { guild_name: String },
    /// Store-to-platform sync found no persisted roles for the guild.
    NeverSynced { guild_name: String },
    /// Store-to-platform sync applied every resolvable role.
    Synced { guild_name: String },
    /// The platform refused a role edit.
    Forbidden { guild_name: String },
    /// Store-to-platform sync aborted on a non-permission error.
    PlatformFailed { guild_name: String },
    /// The guild could not be read from the platform before syncing.
    GuildUnavailable,
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered { guild_name } => write!(
                f,
                "{} registered successfully and synced to database",
                guild_name
            ),
            Self::Updated { guild_name } => write!(f, "{} data synced with database", guild_name),
            Self::StoreFailed { guild_name } => {
                write!(f, "Error syncing {} to database", guild_name)
            }
            Self::NeverSynced { guild_name } => write!(
                f,
                "{} was never synced with database. Please sync with database",
                guild_name
            ),
            Self::Synced { guild_name } => write!(f, "Database synced with {}", guild_name),
            Self::Forbidden { guild_name } => write!(
                f,
                "Sorry I couldn't sync with database as I don't have the right permissions in {}",
                guild_name
            ),
            Self::PlatformFailed { guild_name } => {
                write!(f, "Error syncing database with {}", guild_name)
            }
            Self::GuildUnavailable => write!(f, "Error syncing guild. Please try again"),
        }
    }
}

/// Result of asking the bot a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// The question was empty after trimming.
    Empty,
    /// A stored answer matched.
    Answered(String),
    /// The asker taught a new answer and it was persisted.
    Learned,
    /// The asker did not reply before the teach deadline.
    TimedOut,
    /// A taught answer could not be persisted.
    Failed,
}

impl fmt::Display for AskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No question was asked. Please ask a question"),
            Self::Answered(answer) => write!(f, "{}", answer),
            Self::Learned => write!(f, "Thanks for teaching me the answer. I will remember it"),
            Self::TimedOut => write!(f, "Sorry you took too long to answer"),
            Self::Failed => write!(
                f,
                "Sorry, I couldn't remember that answer. Please try again"
            ),
        }
    }
}

/// Result of waiting for the next message from a specific user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    Received(String),
    TimedOut,
}
