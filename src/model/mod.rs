//! Domain models and operation outcomes.
//!
//! Entity models are converted to domain models at the repository boundary so the
//! service layer never works with SeaORM types directly. Outcome types are the tagged
//! results of core operations and each one maps to exactly one user-facing message.

pub mod guild;
pub mod knowledge;
pub mod outcome;
pub mod provision;
pub mod role;
