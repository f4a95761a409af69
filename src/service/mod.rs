//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot glue and the data layer. They implement the core
//! flows (role synchronization, question answering) against the capability traits
//! in `capability`, so the flows run the same against Discord or against fakes.
//!
//! - **RoleSyncService** (`role_sync`) - two-way guild/store role synchronization
//! - **AskService** (`ask`) - question answering with the teach-me flow
//! - **KnowledgeService** (`knowledge`) - single-writer owner of the knowledge store
//! - **NotificationService** (`notification`) - lifecycle embeds and welcome DMs
//! - **ProvisionService** (`provision`) - webhook-driven role/channel creation

pub mod ask;
pub mod capability;
pub mod knowledge;
pub mod matcher;
pub mod notification;
pub mod provision;
pub mod role_sync;

pub use ask::AskService;
pub use knowledge::KnowledgeService;
pub use notification::NotificationService;
pub use provision::ProvisionService;
pub use role_sync::RoleSyncService;
