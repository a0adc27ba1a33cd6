use super::*;

/// Tests the rarity range filter.
///
/// Expected: Ok with only items inside the inclusive range, ordered by ID
#[tokio::test]
async fn returns_items_within_inclusive_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let below = create_catalog_item(db, 0.5).await?;
    let lower_edge = create_catalog_item(db, 1.0).await?;
    let inside = create_catalog_item(db, 3.0).await?;
    let upper_edge = create_catalog_item(db, 5.0).await?;
    let above = create_catalog_item(db, 5.5).await?;

    let repo = CatalogRepository::new(db);
    let ids: Vec<i32> = repo
        .filter_eligible(RarityBounds { min: 1.0, max: 5.0 })
        .await?
        .into_iter()
        .map(|item| item.id)
        .collect();

    assert_eq!(ids, vec![lower_edge.id, inside.id, upper_edge.id]);
    assert!(!ids.contains(&below.id));
    assert!(!ids.contains(&above.id));

    Ok(())
}

/// Tests that disabled and untradeable items never enter a pool.
///
/// Expected: Ok with only the enabled, tradeable item
#[tokio::test]
async fn excludes_disabled_and_untradeable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let eligible = create_catalog_item(db, 2.0).await?;
    CatalogItemFactory::new(db)
        .rarity(2.0)
        .enabled(false)
        .build()
        .await?;
    CatalogItemFactory::new(db)
        .rarity(2.0)
        .tradeable(false)
        .build()
        .await?;

    let repo = CatalogRepository::new(db);
    let items = repo
        .filter_eligible(RarityBounds { min: 1.0, max: 3.0 })
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, eligible.id);

    Ok(())
}

/// Tests a range no item falls into.
///
/// Expected: Ok with an empty pool
#[tokio::test]
async fn returns_empty_pool_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_catalog_item(db, 1.0).await?;

    let repo = CatalogRepository::new(db);
    let items = repo
        .filter_eligible(RarityBounds {
            min: 50.0,
            max: 60.0,
        })
        .await?;

    assert!(items.is_empty());

    Ok(())
}
