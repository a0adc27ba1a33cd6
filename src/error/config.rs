use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A configuration or data file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pack settings document is not valid TOML or has the wrong shape.
    #[error("Invalid pack settings in {}: {source}", path.display())]
    InvalidSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A rarity category document is malformed or lacks its `rarities` list.
    #[error("Invalid rarity data in {}: {source}", path.display())]
    InvalidRarityData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configured rarity range is inverted.
    #[error("Invalid {kind} rarity bounds: min {min} is greater than max {max}")]
    InvalidRarityBounds {
        /// Which claim path the bounds belong to
        kind: String,
        min: f64,
        max: f64,
    },
}
