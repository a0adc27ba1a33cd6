//! `/pack daily` and `/pack weekly`.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::embed,
    error::{pack::PackError, AppError},
    model::claim::{ClaimKind, ClaimOutcome, ClaimPackParam, PackReward},
    service::pack::PackService,
    state::BotState,
};

pub const NAME: &str = "pack";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Claim a pack")
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            ClaimKind::Daily.as_str(),
            "Claim your daily pack! (3 uses)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            ClaimKind::Weekly.as_str(),
            "Claim your weekly pack!",
        ))
}

/// Runs a claim for the invoking user and answers the interaction.
///
/// Every invocation is answered, including ones with an unknown subcommand, so Discord
/// never reports that the application did not respond.
pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) {
    let owner_id = cmd.user.id.get();
    let subcommand = cmd.data.options.first().map(|option| option.name.as_str());

    let result = match claim_kind(subcommand) {
        Ok(kind) => {
            PackService::new(
                &state.db,
                &state.settings,
                &state.rarity_tables,
                state.stat_bonus,
            )
            .claim(ClaimPackParam { owner_id, kind })
            .await
        }
        Err(e) => Err(e.into()),
    };

    let message = match reply_for(owner_id, result) {
        Reply::Reward(reward) => CreateInteractionResponseMessage::new()
            .embed(embed::reward_embed(&reward, &cmd.user)),
        Reply::Ephemeral(content) => CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    };

    if let Err(e) = cmd
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to /{} for user {}: {:?}", NAME, owner_id, e);
    }
}

/// How an interaction is answered.
#[derive(Debug, PartialEq)]
enum Reply {
    /// Public reward embed.
    Reward(Box<PackReward>),
    /// Text only the invoking user sees.
    Ephemeral(String),
}

fn claim_kind(subcommand: Option<&str>) -> Result<ClaimKind, PackError> {
    subcommand
        .and_then(ClaimKind::from_subcommand)
        .ok_or_else(|| PackError::UnknownSubcommand(subcommand.map(str::to_string)))
}

/// Maps a claim result to the reply; rejections and failures stay ephemeral.
fn reply_for(owner_id: u64, result: Result<ClaimOutcome, AppError>) -> Reply {
    match result {
        Ok(ClaimOutcome::Claimed(reward)) => Reply::Reward(Box::new(reward)),
        Ok(ClaimOutcome::OnCooldown { kind, available_at }) => {
            tracing::debug!("User {} is on {} cooldown", owner_id, kind);
            Reply::Ephemeral(embed::cooldown_message(kind, available_at))
        }
        Ok(ClaimOutcome::NotConfigured(kind)) => {
            tracing::warn!("{} pack claimed but no rarity bounds are configured", kind);
            Reply::Ephemeral(embed::not_configured_message(kind))
        }
        Err(e) => {
            tracing::error!("Failed to claim pack for user {}: {}", owner_id, e);
            Reply::Ephemeral(embed::FAILURE_MESSAGE.to_string())
        }
    }
}
