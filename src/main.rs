mod bot;
mod cli;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::{
    cli::{Cli, Command},
    config::{Config, PackSettings},
    error::AppError,
    service::export::ExportService,
    state::BotState,
};

const DEFAULT_LOG_FILTER: &str = "info,packdrop=debug";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_tracing();

    match cli.command {
        Some(Command::ExportResources { path }) => export_resources(&path).await,
        None => run_bot().await,
    }
}

/// Dumps pack resources without touching Discord.
async fn export_resources(path: &Path) -> Result<(), AppError> {
    let database_url = config::database_url_from_env()?;
    let db = startup::connect_to_database(&database_url).await?;

    ExportService::new(&db).write_json(path).await?;

    Ok(())
}

async fn run_bot() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config.database_url).await?;

    let settings = PackSettings::load(&config.pack_config_path)?;
    let rarity_tables = startup::load_rarity_tables(&config.rarity_data_dir)?;

    let state = BotState::new(db, settings, rarity_tables, config.stat_bonus);

    tracing::info!("Starting pack drop bot");

    bot::start::start_bot(&config, state).await
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
