use super::*;

/// Tests registering a previously unseen user id.
///
/// Verifies that the repository inserts the row with the provided username and
/// timestamp and a zero playtime aggregate.
///
/// Expected: Ok with the user retrievable afterwards
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.register_if_absent("u1", "Alice", 1700000000000).await?;

    let user = repo.find_by_id("u1").await?.unwrap();
    assert_eq!(user.username, "Alice");
    assert_eq!(user.total_playtime, 0);
    assert_eq!(user.created_at, 1700000000000);

    Ok(())
}

/// Tests re-registering an existing user id.
///
/// Verifies that the second insert is ignored: no error is returned and the
/// originally registered username survives (first write wins).
///
/// Expected: Ok with username unchanged
#[tokio::test]
async fn second_call_preserves_existing_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.register_if_absent("u1", "Alice", 1700000000000).await?;
    let result = repo.register_if_absent("u1", "Bob", 1700000000001).await;

    assert!(result.is_ok());

    let user = repo.find_by_id("u1").await?.unwrap();
    assert_eq!(user.username, "Alice");

    Ok(())
}

/// Tests that re-registration leaves the playtime aggregate alone.
///
/// A duplicate insert must not reset an already accumulated total back to the
/// zero the insert carries.
///
/// Expected: Ok with total_playtime unchanged
#[tokio::test]
async fn second_call_preserves_playtime() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.register_if_absent("u1", "Alice", 1700000000000).await?;
    repo.sync_playtime_if_higher("u1", 500).await?;
    repo.register_if_absent("u1", "Alice", 1700000000002).await?;

    let user = repo.find_by_id("u1").await?.unwrap();
    assert_eq!(user.total_playtime, 500);

    Ok(())
}
