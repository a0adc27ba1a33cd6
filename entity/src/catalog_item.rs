use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Selection weight, also the key into the rarity category tables.
    pub rarity: f64,
    pub enabled: bool,
    pub tradeable: bool,
    pub health: i32,
    pub attack: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_instance::Entity")]
    ItemInstance,
}

impl Related<super::item_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemInstance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
