//! State shared by every bot event handler.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::{PackSettings, StatBonusRange},
    model::rarity::RarityTables,
};

/// Bot state containing shared resources.
///
/// Settings and rarity tables are loaded once at startup and never mutated, so they
/// are shared behind `Arc` without locking. `DatabaseConnection` is a pool and clones
/// share it.
#[derive(Clone)]
pub struct BotState {
    pub db: DatabaseConnection,
    pub settings: Arc<PackSettings>,
    pub rarity_tables: Arc<RarityTables>,
    pub stat_bonus: StatBonusRange,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        settings: PackSettings,
        rarity_tables: RarityTables,
        stat_bonus: StatBonusRange,
    ) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
            rarity_tables: Arc::new(rarity_tables),
            stat_bonus,
        }
    }
}
