use super::*;

/// Tests listing all resources.
///
/// Expected: Ok with every resource ordered by owner ID
#[tokio::test]
async fn returns_all_ordered_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PackResource)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for owner_id in [30, 10, 20] {
        PackResourceFactory::new(db).owner_id(owner_id).build().await?;
    }

    let repo = PackResourceRepository::new(db);
    let owners: Vec<u64> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|r| r.owner_id)
        .collect();

    assert_eq!(owners, vec![10, 20, 30]);

    Ok(())
}
