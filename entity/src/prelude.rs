pub use super::catalog_item::Entity as CatalogItem;
pub use super::item_instance::Entity as ItemInstance;
pub use super::pack_resource::Entity as PackResource;
