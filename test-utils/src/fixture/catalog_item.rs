//! In-memory catalog item models.

use crate::factory::helpers::next_id;

/// Creates an enabled, tradeable catalog item model with default stats.
pub fn entity() -> entity::catalog_item::Model {
    entity_with_rarity(1.0)
}

/// Creates a catalog item model with the given rarity and a unique ID.
pub fn entity_with_rarity(rarity: f64) -> entity::catalog_item::Model {
    let id = next_id() as i32;
    entity::catalog_item::Model {
        id,
        name: format!("Item {}", id),
        rarity,
        enabled: true,
        tradeable: true,
        health: 100,
        attack: 50,
    }
}

/// Creates one catalog item model per rarity, in order.
pub fn pool(rarities: &[f64]) -> Vec<entity::catalog_item::Model> {
    rarities.iter().map(|&r| entity_with_rarity(r)).collect()
}
