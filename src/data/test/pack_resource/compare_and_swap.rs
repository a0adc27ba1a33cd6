use super::*;

/// Tests a swap against the current stored state.
///
/// Expected: Ok(true) and the new state persisted
#[tokio::test]
async fn applies_when_state_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackResourceRepository::new(db);
    let current = repo.get_or_create(42).await?;
    let now = Utc::now();
    let mut next = current.clone();
    next.uses = 3;
    next.daily_cooldown = Some(now);

    assert!(repo.compare_and_swap(&current, &next).await?);

    let stored = repo.find_by_owner(42).await?.unwrap();
    assert_eq!(stored.uses, 3);
    assert_eq!(stored.daily_cooldown, Some(now));

    Ok(())
}

/// Tests a swap computed from a stale read.
///
/// A second claim computed from the same snapshot must not overwrite the first,
/// which is what keeps two concurrent claims from both incrementing.
///
/// Expected: Ok(false) and the first write preserved
#[tokio::test]
async fn rejects_stale_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackResourceRepository::new(db);
    let snapshot = repo.get_or_create(42).await?;
    let now = Utc::now();

    let first = snapshot.claim(ClaimKind::Daily, now).unwrap();
    let second = snapshot.claim(ClaimKind::Daily, now).unwrap();

    assert!(repo.compare_and_swap(&snapshot, &first).await?);
    assert!(!repo.compare_and_swap(&snapshot, &second).await?);

    let stored = repo.find_by_owner(42).await?.unwrap();
    assert_eq!(stored.uses, 1);

    Ok(())
}

/// Tests that a cooldown change alone invalidates the snapshot.
///
/// Expected: Ok(false) when the weekly cooldown was stamped after the read
#[tokio::test]
async fn rejects_when_cooldown_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackResourceRepository::new(db);
    let snapshot = repo.get_or_create(42).await?;
    repo.set_weekly_cooldown(42, Utc::now()).await?;

    let next = snapshot.claim(ClaimKind::Weekly, Utc::now()).unwrap();

    assert!(!repo.compare_and_swap(&snapshot, &next).await?);

    Ok(())
}

/// Tests a swap against a row that carries an existing cooldown.
///
/// Expected: Ok(true) when the stored timestamp equals the snapshot
#[tokio::test]
async fn matches_existing_cooldown_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expired = Utc::now() - TimeDelta::days(2);
    PackResourceFactory::new(db)
        .owner_id(8)
        .uses(3)
        .daily_cooldown(expired)
        .build()
        .await?;

    let repo = PackResourceRepository::new(db);
    let snapshot = repo.find_by_owner(8).await?.unwrap();
    let next = snapshot.claim(ClaimKind::Daily, Utc::now()).unwrap();

    assert!(repo.compare_and_swap(&snapshot, &next).await?);

    let stored = repo.find_by_owner(8).await?.unwrap();
    assert_eq!(stored.uses, 1);
    assert!(stored.daily_cooldown.is_none());

    Ok(())
}
