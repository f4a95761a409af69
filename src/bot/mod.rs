//! Discord bot glue.
//!
//! Owns the serenity client, routes gateway events to per-event handler functions and
//! adapts slash command interactions to the capability traits the services run against.

pub mod capability;
pub mod command;
pub mod handler;
pub mod start;
