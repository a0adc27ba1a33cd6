use serenity::all::{Context, Interaction};

use crate::{bot::command, state::BotState};

/// Routes an interaction to its command.
///
/// Only slash commands are handled; unknown command names are logged and ignored.
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(cmd) = interaction else {
        return;
    };

    match cmd.data.name.as_str() {
        command::pack::NAME => command::pack::run(state, &ctx, &cmd).await,
        other => tracing::warn!("Received unknown command /{}", other),
    }
}
