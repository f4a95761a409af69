//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_role;
//!
//! let admin_role = create_test_role(111111111, "Admin", 8);
//! let member_role = create_test_role(222222222, "Member", 0);
//! ```

pub mod role;

pub use role::create_test_role;
