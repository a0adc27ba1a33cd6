use super::*;

/// Tests granting an item to an owner.
///
/// Expected: Ok with the instance persisted and listed for the owner
#[tokio::test]
async fn creates_instance_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .with_table(entity::prelude::ItemInstance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = create_catalog_item(db, 4.0).await?;

    let repo = ItemInstanceRepository::new(db);
    let instance = repo
        .create(CreateItemInstanceParam {
            owner_id: 123456789,
            catalog_item_id: item.id,
            health_bonus: -5,
            attack_bonus: 12,
        })
        .await?;

    assert_eq!(instance.owner_id, 123456789);
    assert_eq!(instance.catalog_item_id, item.id);
    assert_eq!(instance.health_bonus, -5);
    assert_eq!(instance.attack_bonus, 12);

    let owned = repo.get_by_owner(123456789).await?;
    assert_eq!(owned, vec![instance]);
    assert!(repo.get_by_owner(1).await?.is_empty());

    Ok(())
}
