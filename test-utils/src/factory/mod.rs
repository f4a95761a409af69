//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::create_guild(&db).await?;
//! let role = factory::create_role(&db, &guild.guild_id, "111111111").await?;
//!
//! let role = factory::role::RoleFactory::new(&db, &guild.guild_id)
//!     .role_id("222222222")
//!     .role_name("Moderator")
//!     .role_perm(8)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild` - Create guild entities
//! - `role` - Create role entities
//! - `helpers` - Unique id generation and dependency helpers

pub mod guild;
pub mod helpers;
pub mod role;

// Re-export commonly used factory functions for concise usage
pub use guild::create_guild;
pub use helpers::create_guild_with_roles;
pub use role::create_role;
