use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that snapshots are stored with their payloads verbatim.
///
/// Expected: Ok with both opaque payloads round-tripped
#[tokio::test]
async fn stores_payloads_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SaveFileRepository::new(db);
    let snapshot = repo
        .insert_snapshot(
            &user.user_id,
            json!({"level": 3, "checkpoint": "vault"}),
            json!({"keys": 2, "medkits": 1}),
            1700000000000,
        )
        .await?;

    assert_eq!(snapshot.user_id, user.user_id);
    assert_eq!(snapshot.level_data, json!({"level": 3, "checkpoint": "vault"}));
    assert_eq!(snapshot.inventory_data, json!({"keys": 2, "medkits": 1}));
    assert_eq!(snapshot.updated_at, 1700000000000);

    Ok(())
}

/// Tests that each upload appends a new row.
///
/// Snapshots are a log, not a slot: a second upload for the same user must not
/// replace the first.
///
/// Expected: Ok with two rows and distinct ids
#[tokio::test]
async fn appends_instead_of_updating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SaveFileRepository::new(db);
    let first = repo
        .insert_snapshot(&user.user_id, json!({"level": 1}), json!({}), 1700000000000)
        .await?;
    let second = repo
        .insert_snapshot(&user.user_id, json!({"level": 2}), json!({}), 1700000001000)
        .await?;

    assert_ne!(first.save_id, second.save_id);

    let count = entity::prelude::SaveFile::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests uploading a snapshot for a user that does not exist.
///
/// The foreign key on user_id rejects the insert at the datastore.
///
/// Expected: Err from the constraint
#[tokio::test]
async fn unknown_user_is_rejected() {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SaveFileRepository::new(db);
    let result = repo
        .insert_snapshot("no-such-user", json!({}), json!({}), 1700000000000)
        .await;

    assert!(result.is_err());
}
