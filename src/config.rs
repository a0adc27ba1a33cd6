//! Environment and file based configuration.
//!
//! Process settings come from environment variables (optionally via `.env`), while the
//! pack rarity ranges come from a TOML settings document so they can be tuned without
//! touching the deployment environment.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::{config::ConfigError, AppError},
    model::claim::ClaimKind,
};

const DEFAULT_PACK_CONFIG_PATH: &str = "pack/config.toml";
const DEFAULT_RARITY_DATA_DIR: &str = "pack";
const DEFAULT_MAX_STAT_BONUS: i32 = 20;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Path of the TOML document holding daily/weekly rarity bounds.
    pub pack_config_path: PathBuf,
    /// Directory containing the four rarity category documents.
    pub rarity_data_dir: PathBuf,

    pub stat_bonus: StatBonusRange,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: database_url_from_env()?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            pack_config_path: std::env::var("PACK_CONFIG_PATH")
                .unwrap_or_else(|_| DEFAULT_PACK_CONFIG_PATH.to_string())
                .into(),
            rarity_data_dir: std::env::var("RARITY_DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_RARITY_DATA_DIR.to_string())
                .into(),
            stat_bonus: StatBonusRange {
                max_health_bonus: int_from_env("MAX_HEALTH_BONUS", DEFAULT_MAX_STAT_BONUS)?,
                max_attack_bonus: int_from_env("MAX_ATTACK_BONUS", DEFAULT_MAX_STAT_BONUS)?,
            },
        })
    }
}

/// Reads `DATABASE_URL`, the only setting offline commands such as the export need.
pub fn database_url_from_env() -> Result<String, ConfigError> {
    std::env::var("DATABASE_URL")
        .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
}

/// Reads an optional non-negative integer environment variable.
fn int_from_env(name: &str, default: i32) -> Result<i32, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().parse::<i32>() {
            Ok(parsed) if parsed >= 0 => Ok(parsed),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        },
    }
}

/// Symmetric bounds for the random stat bonuses rolled on every reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBonusRange {
    pub max_health_bonus: i32,
    pub max_attack_bonus: i32,
}

impl Default for StatBonusRange {
    fn default() -> Self {
        Self {
            max_health_bonus: DEFAULT_MAX_STAT_BONUS,
            max_attack_bonus: DEFAULT_MAX_STAT_BONUS,
        }
    }
}

/// Inclusive rarity range a pack draws from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityBounds {
    pub min: f64,
    pub max: f64,
}

/// Pack settings loaded once at startup.
///
/// A claim path whose bounds are absent stays disabled and answers with a
/// "not configured" message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackSettings {
    pub daily: Option<RarityBounds>,
    pub weekly: Option<RarityBounds>,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    daily: DailySection,
    #[serde(default)]
    weekly: WeeklySection,
}

#[derive(Debug, Default, Deserialize)]
struct DailySection {
    min_rarity_daily: Option<f64>,
    max_rarity_daily: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct WeeklySection {
    min_rarity_weekly: Option<f64>,
    max_rarity_weekly: Option<f64>,
}

impl PackSettings {
    /// Loads pack settings from a TOML document.
    ///
    /// A missing file disables both claim paths rather than failing startup, matching
    /// the behaviour of a document with no bounds in it.
    ///
    /// # Arguments
    /// - `path` - Location of the settings document
    ///
    /// # Returns
    /// - `Ok(PackSettings)` - Parsed settings (possibly with disabled paths)
    /// - `Err(ConfigError::ReadFile)` - File exists but could not be read
    /// - `Err(ConfigError::InvalidSettings)` - File is not valid TOML for this shape
    /// - `Err(ConfigError::InvalidRarityBounds)` - A configured range has `min > max`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Pack settings not found at {}, daily and weekly packs are disabled",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_toml_str(path, &content)
    }

    /// Parses pack settings from TOML content.
    ///
    /// `path` is only used to label errors.
    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let document: SettingsDocument =
            toml::from_str(content).map_err(|source| ConfigError::InvalidSettings {
                path: path.to_path_buf(),
                source,
            })?;

        let daily = bounds(
            ClaimKind::Daily,
            document.daily.min_rarity_daily,
            document.daily.max_rarity_daily,
        )?;
        let weekly = bounds(
            ClaimKind::Weekly,
            document.weekly.min_rarity_weekly,
            document.weekly.max_rarity_weekly,
        )?;

        Ok(Self { daily, weekly })
    }

    /// Returns the rarity range for a claim path, if it is configured.
    pub fn bounds(&self, kind: ClaimKind) -> Option<RarityBounds> {
        match kind {
            ClaimKind::Daily => self.daily,
            ClaimKind::Weekly => self.weekly,
        }
    }
}

fn bounds(
    kind: ClaimKind,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<Option<RarityBounds>, ConfigError> {
    let (Some(min), Some(max)) = (min, max) else {
        return Ok(None);
    };

    if min > max {
        return Err(ConfigError::InvalidRarityBounds {
            kind: kind.to_string(),
            min,
            max,
        });
    }

    Ok(Some(RarityBounds { min, max }))
}
