//! Error types for the pack drop bot.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Bot
//! handlers log it and answer the user with a generic message rather than leaking
//! internals into Discord.

pub mod config;
pub mod pack;

use thiserror::Error;

use crate::error::{config::ConfigError, pack::PackError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup, environment loading or data file parsing.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Pack claim or selection failure.
    #[error(transparent)]
    PackErr(#[from] PackError),

    /// Database operation error from SeaORM.
    ///
    /// Any claim that hits this error is rolled back, so no uses are consumed
    /// and no reward is granted.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error while writing an export.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Serialization error while writing an export.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
