//! Reward embed and reply texts.
//!
//! Text is assembled by plain functions so it can be tested without a Discord
//! connection; [`reward_embed`] only wraps it in serenity builders.

use chrono::{DateTime, Utc};
use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, User};

use crate::model::claim::{ClaimKind, PackReward, MAX_USES};

/// Reply sent when a claim fails for an operational reason.
pub const FAILURE_MESSAGE: &str =
    "Something went wrong while opening your pack. No uses were consumed, please try again later.";

/// Builds the public embed announcing a granted reward.
pub fn reward_embed(reward: &PackReward, user: &User) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🎁 You got {}!", reward.item.name))
        .colour(Colour::GOLD)
        .description(reward_description(reward))
        .author(CreateEmbedAuthor::new(user.display_name()).icon_url(user.face()))
        .footer(CreateEmbedFooter::new(reward_footer(reward)))
}

/// Rarity line, one line per matching category table, then stats with bonuses.
pub fn reward_description(reward: &PackReward) -> String {
    let mut desc = format!("📖 **Rarity:** {}\n", reward.item.rarity);

    for matched in &reward.categories {
        desc.push_str(&format!(
            "{} **{} Rarity:** {} ({})\n",
            matched.category.emoji(),
            matched.category.label(),
            matched.entry.name,
            matched.entry.rarity
        ));
    }

    desc.push_str(&format!(
        "\n❤️ **Health:** {} ({:+})\n⚔️ **Attack:** {} ({:+})\n",
        reward.item.health, reward.health_bonus, reward.item.attack, reward.attack_bonus
    ));

    desc
}

pub fn reward_footer(reward: &PackReward) -> String {
    match reward.kind {
        ClaimKind::Daily if reward.uses >= MAX_USES => {
            format!("Uses: {}/{}. Come back tomorrow.", reward.uses, MAX_USES)
        }
        ClaimKind::Daily => format!("Uses: {}/{}.", reward.uses, MAX_USES),
        ClaimKind::Weekly => "Come back next week for another pack!".to_string(),
    }
}

/// Rejection text with a Discord relative timestamp.
pub fn cooldown_message(kind: ClaimKind, available_at: DateTime<Utc>) -> String {
    format!(
        "You've used all {} packs. Come back <t:{}:R>!",
        kind,
        available_at.timestamp()
    )
}

pub fn not_configured_message(kind: ClaimKind) -> String {
    let label = match kind {
        ClaimKind::Daily => "Daily",
        ClaimKind::Weekly => "Weekly",
    };
    format!(
        "{} packs are not configured. Contact support if this persists.",
        label
    )
}
