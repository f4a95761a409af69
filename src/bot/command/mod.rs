//! Slash command definitions and handlers.
//!
//! Each submodule exposes its command `NAME`, a `register` builder used at ready time,
//! and a `run` handler called by the interaction router.

pub mod ask_me;
pub mod ping;
pub mod sync_guild;

use serenity::all::{CommandInteraction, CreateCommand, ResolvedValue};

/// Every command registered globally on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![ping::register(), sync_guild::register(), ask_me::register()]
}

/// Reads a boolean option by name.
pub fn bool_option(command: &CommandInteraction, name: &str) -> Option<bool> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Boolean(value) => Some(value),
            _ => None,
        })
}

/// Reads a string option by name.
pub fn string_option(command: &CommandInteraction, name: &str) -> Option<String> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value.to_string()),
            _ => None,
        })
}
