use super::*;

/// Tests clearing the daily cooldown.
///
/// Expected: Ok with cooldown cleared, uses reset to 0 and the owner no longer
/// on daily cooldown
#[tokio::test]
async fn remove_daily_cooldown_resets_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PackResourceFactory::new(db)
        .owner_id(10)
        .uses(3)
        .daily_cooldown(Utc::now())
        .build()
        .await?;

    let repo = PackResourceRepository::new(db);
    repo.remove_daily_cooldown(10).await?;

    let stored = repo.find_by_owner(10).await?.unwrap();
    assert!(stored.daily_cooldown.is_none());
    assert_eq!(stored.uses, 0);
    assert!(!stored.is_daily_on_cooldown(Utc::now()));

    Ok(())
}

/// Tests clearing the weekly cooldown.
///
/// Expected: Ok with weekly cooldown cleared and uses untouched
#[tokio::test]
async fn remove_weekly_cooldown_keeps_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    PackResourceFactory::new(db)
        .owner_id(11)
        .uses(4)
        .daily_cooldown(now)
        .weekly_cooldown(now)
        .build()
        .await?;

    let repo = PackResourceRepository::new(db);
    repo.remove_weekly_cooldown(11).await?;

    let stored = repo.find_by_owner(11).await?.unwrap();
    assert!(stored.weekly_cooldown.is_none());
    assert_eq!(stored.daily_cooldown, Some(now));
    assert_eq!(stored.uses, 4);

    Ok(())
}
