//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Registers the global slash commands so
//! they are available in every guild the bot is in.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot keeps running so previously registered
/// commands stay usable.
///
/// # Arguments
/// - `ctx` - Discord context used for the command registration request
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
    }
}
