use super::*;

/// Tests stamping the daily cooldown.
///
/// Expected: Ok with the daily cooldown set and uses unchanged
#[tokio::test]
async fn sets_daily_cooldown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PackResourceFactory::new(db).owner_id(20).uses(2).build().await?;

    let repo = PackResourceRepository::new(db);
    let now = Utc::now();
    repo.set_daily_cooldown(20, now).await?;

    let stored = repo.find_by_owner(20).await?.unwrap();
    assert_eq!(stored.daily_cooldown, Some(now));
    assert!(stored.weekly_cooldown.is_none());
    assert_eq!(stored.uses, 2);
    assert!(stored.is_daily_on_cooldown(now + TimeDelta::hours(23)));

    Ok(())
}

/// Tests stamping the weekly cooldown.
///
/// Expected: Ok with only the weekly cooldown set
#[tokio::test]
async fn sets_weekly_cooldown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PackResourceFactory::new(db).owner_id(21).build().await?;

    let repo = PackResourceRepository::new(db);
    let now = Utc::now();
    repo.set_weekly_cooldown(21, now).await?;

    let stored = repo.find_by_owner(21).await?.unwrap();
    assert_eq!(stored.weekly_cooldown, Some(now));
    assert!(stored.daily_cooldown.is_none());
    assert!(stored.is_weekly_on_cooldown(now + TimeDelta::days(6)));

    Ok(())
}
