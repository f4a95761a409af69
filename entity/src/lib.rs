//! SeaORM entity models for the persisted guild and role tables.

pub mod prelude;

pub mod guild;
pub mod role;
