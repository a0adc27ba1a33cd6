use super::*;

/// Tests lazy creation on first access.
///
/// Expected: Ok with a fresh resource (0 uses, no cooldowns) persisted for the owner
#[tokio::test]
async fn creates_resource_for_new_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackResourceRepository::new(db);
    let resource = repo.get_or_create(123456789).await?;

    assert_eq!(resource, PackResource::new(123456789));
    assert!(repo.find_by_owner(123456789).await?.is_some());

    Ok(())
}

/// Tests that an existing resource is returned untouched.
///
/// Expected: Ok with the stored uses and cooldown preserved
#[tokio::test]
async fn returns_existing_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stamp = Utc::now() - TimeDelta::hours(1);
    PackResourceFactory::new(db)
        .owner_id(555)
        .uses(3)
        .daily_cooldown(stamp)
        .build()
        .await?;

    let repo = PackResourceRepository::new(db);
    let resource = repo.get_or_create(555).await?;

    assert_eq!(resource.uses, 3);
    assert_eq!(resource.daily_cooldown, Some(stamp));

    Ok(())
}

/// Tests that calling twice does not create a duplicate or fail.
///
/// Expected: Ok with one row for the owner
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackResourceRepository::new(db);
    repo.get_or_create(77).await?;
    repo.get_or_create(77).await?;

    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that looking up an unknown owner does not create anything.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackResourceRepository::new(db);

    assert!(repo.find_by_owner(999).await?.is_none());

    Ok(())
}
