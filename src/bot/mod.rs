//! Discord bot integration for pack claims.
//!
//! The bot registers the `/pack` command group once connected and answers each
//! invocation on its own task. Claim state and rarity data are shared with every
//! handler through [`BotState`](crate::state::BotState).
//!
//! # Gateway Intents
//!
//! Slash commands arrive as interactions, so only `GUILDS` is requested. No privileged
//! intents are needed.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
