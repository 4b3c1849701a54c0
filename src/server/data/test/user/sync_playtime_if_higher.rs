use super::*;

/// Tests merging a candidate above the stored total.
///
/// Verifies that the guarded update raises the aggregate to the candidate and
/// reports one affected row.
///
/// Expected: Ok(1) with total raised
#[tokio::test]
async fn raises_total_for_higher_candidate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).total_playtime(100).build().await?;

    let repo = UserRepository::new(db);
    let affected = repo.sync_playtime_if_higher(&user.user_id, 500).await?;

    assert_eq!(affected, 1);

    let stored = repo.find_by_id(&user.user_id).await?.unwrap();
    assert_eq!(stored.total_playtime, 500);

    Ok(())
}

/// Tests merging a candidate below the stored total.
///
/// Verifies that the aggregate never decreases: the update matches no row and
/// the stored value is untouched.
///
/// Expected: Ok(0) with total unchanged
#[tokio::test]
async fn ignores_lower_candidate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).total_playtime(500).build().await?;

    let repo = UserRepository::new(db);
    let affected = repo.sync_playtime_if_higher(&user.user_id, 100).await?;

    assert_eq!(affected, 0);

    let stored = repo.find_by_id(&user.user_id).await?.unwrap();
    assert_eq!(stored.total_playtime, 500);

    Ok(())
}

/// Tests merging a candidate equal to the stored total.
///
/// The merge is idempotent: replaying the same report matches no row.
///
/// Expected: Ok(0) with total unchanged
#[tokio::test]
async fn equal_candidate_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).total_playtime(500).build().await?;

    let repo = UserRepository::new(db);
    let affected = repo.sync_playtime_if_higher(&user.user_id, 500).await?;

    assert_eq!(affected, 0);

    Ok(())
}

/// Tests syncing playtime for a non-existent user.
///
/// Verifies that the repository handles an unknown id gracefully without
/// returning an error (no-op behavior).
///
/// Expected: Ok(0)
#[tokio::test]
async fn succeeds_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let affected = repo.sync_playtime_if_higher("no-such-user", 500).await?;

    assert_eq!(affected, 0);

    Ok(())
}
