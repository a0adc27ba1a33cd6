//! Catalog item factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test catalog items with customizable fields.
///
/// Defaults produce an enabled, tradeable item that any pack pool covering its
/// rarity will pick up.
///
/// # Example
///
/// ```rust,ignore
/// let item = CatalogItemFactory::new(&db)
///     .name("Straw Hat")
///     .rarity(7.5)
///     .tradeable(false)
///     .build()
///     .await?;
/// ```
pub struct CatalogItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rarity: f64,
    enabled: bool,
    tradeable: bool,
    health: i32,
    attack: i32,
}

impl<'a> CatalogItemFactory<'a> {
    /// Creates a new CatalogItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"`
    /// - rarity: `1.0`
    /// - enabled / tradeable: `true`
    /// - health: `100`, attack: `50`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Item {}", id),
            rarity: 1.0,
            enabled: true,
            tradeable: true,
            health: 100,
            attack: 50,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rarity(mut self, rarity: f64) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn tradeable(mut self, tradeable: bool) -> Self {
        self.tradeable = tradeable;
        self
    }

    pub fn health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    /// Builds and inserts the catalog item into the database.
    ///
    /// # Returns
    /// - `Ok(entity::catalog_item::Model)` - Created catalog item
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::catalog_item::Model, DbErr> {
        entity::catalog_item::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            rarity: ActiveValue::Set(self.rarity),
            enabled: ActiveValue::Set(self.enabled),
            tradeable: ActiveValue::Set(self.tradeable),
            health: ActiveValue::Set(self.health),
            attack: ActiveValue::Set(self.attack),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled, tradeable catalog item with the given rarity.
///
/// Shorthand for `CatalogItemFactory::new(db).rarity(rarity).build().await`.
pub async fn create_catalog_item(
    db: &DatabaseConnection,
    rarity: f64,
) -> Result<entity::catalog_item::Model, DbErr> {
    CatalogItemFactory::new(db).rarity(rarity).build().await
}
