//! Repository layer for persisted state.
//!
//! Repositories perform the store operations for each domain and return domain models
//! from `model/`. The SQL repositories are generic over `ConnectionTrait` so a service
//! can run them against the pool directly or inside a single transaction.

pub mod guild;
pub mod knowledge;
pub mod role;

pub use guild::GuildRepository;
pub use knowledge::KnowledgeFile;
pub use role::RoleRepository;
