use std::path::Path;

use crate::{
    error::{config::ConfigError, AppError},
    model::rarity::{RarityCategory, RarityTable, RarityTables},
};

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `database_url` - Connection string, usually `DATABASE_URL`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the four rarity category documents from `dir`.
///
/// Every document must exist and carry a `rarities` array.
///
/// # Returns
/// - `Ok(RarityTables)` - All four tables loaded
/// - `Err(ConfigError::ReadFile)` - A document could not be read
/// - `Err(ConfigError::InvalidRarityData)` - A document is malformed
pub fn load_rarity_tables(dir: &Path) -> Result<RarityTables, ConfigError> {
    let mut tables = RarityTables::default();

    for category in RarityCategory::ALL {
        let path = dir.join(category.file_name());

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let table = RarityTable::from_json_str(&content)
            .map_err(|source| ConfigError::InvalidRarityData {
                path: path.clone(),
                source,
            })?;

        if table.is_empty() {
            tracing::warn!("{} has no rarity entries", path.display());
        } else {
            tracing::debug!(
                "Loaded {} {} rarity entries",
                table.len(),
                category.label()
            );
        }

        *tables.table_mut(category) = table;
    }

    Ok(tables)
}
