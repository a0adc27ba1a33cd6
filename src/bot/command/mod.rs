//! Slash command definitions.

pub mod pack;

use serenity::all::CreateCommand;

/// Every command the bot registers on startup.
pub fn all() -> Vec<CreateCommand> {
    vec![pack::register()]
}
