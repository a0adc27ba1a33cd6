//! Catalog items and granted item instances.

use chrono::{DateTime, Utc};

/// A reward-eligible item from the game catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: i32,
    pub name: String,
    /// Selection weight, also the key into the rarity category tables.
    pub rarity: f64,
    pub enabled: bool,
    pub tradeable: bool,
    pub health: i32,
    pub attack: i32,
}

impl CatalogItem {
    pub fn from_entity(entity: entity::catalog_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rarity: entity.rarity,
            enabled: entity.enabled,
            tradeable: entity.tradeable,
            health: entity.health,
            attack: entity.attack,
        }
    }
}

/// A catalog item granted to an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInstance {
    pub id: i32,
    pub owner_id: u64,
    pub catalog_item_id: i32,
    pub health_bonus: i32,
    pub attack_bonus: i32,
    pub created_at: DateTime<Utc>,
}

impl ItemInstance {
    pub fn from_entity(entity: entity::item_instance::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id as u64,
            catalog_item_id: entity.catalog_item_id,
            health_bonus: entity.health_bonus,
            attack_bonus: entity.attack_bonus,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for granting a catalog item to an owner.
#[derive(Debug, Clone)]
pub struct CreateItemInstanceParam {
    pub owner_id: u64,
    pub catalog_item_id: i32,
    pub health_bonus: i32,
    pub attack_bonus: i32,
}
