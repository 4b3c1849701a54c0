use super::*;

/// Tests appending an event to an existing session.
///
/// Verifies that the stored row carries the coordinates, tag, timestamp, and
/// opaque payload verbatim, and that the server assigned an id.
///
/// Expected: Ok with all fields round-tripped
#[tokio::test]
async fn stores_event_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_session_with_user(db).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .insert(
            &session.session_id,
            "PLAYER_DEATH",
            12.0,
            34.0,
            1700000000000,
            json!({"cause": "spike_trap"}),
        )
        .await?;

    assert!(event.event_id >= 1);
    assert_eq!(event.session_id, session.session_id);
    assert_eq!(event.event_type, "PLAYER_DEATH");
    assert_eq!(event.x, 12.0);
    assert_eq!(event.y, 34.0);
    assert_eq!(event.timestamp, 1700000000000);
    assert_eq!(event.meta, json!({"cause": "spike_trap"}));

    Ok(())
}

/// Tests appending an event for a session that does not exist.
///
/// The foreign key on session_id rejects the insert at the datastore; event
/// rows can never dangle.
///
/// Expected: Err from the constraint
#[tokio::test]
async fn unknown_session_is_rejected() {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo
        .insert("no-such-session", "CHECKPOINT", 0.0, 0.0, 1700000000000, json!({}))
        .await;

    assert!(result.is_err());
}

/// Tests that duplicate submissions produce duplicate rows.
///
/// There is no uniqueness constraint on events; a client retry is stored
/// twice and deduplication is left to downstream consumers.
///
/// Expected: Ok with two rows carrying distinct ids
#[tokio::test]
async fn duplicate_submissions_are_kept() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_session_with_user(db).await?;

    let repo = EventRepository::new(db);
    let first = repo
        .insert(&session.session_id, "ITEM_USED", 1.0, 2.0, 1700000000000, json!({}))
        .await?;
    let second = repo
        .insert(&session.session_id, "ITEM_USED", 1.0, 2.0, 1700000000000, json!({}))
        .await?;

    assert_ne!(first.event_id, second.event_id);

    Ok(())
}
