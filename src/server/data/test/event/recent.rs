use super::*;

/// Tests the recent view ordering.
///
/// Events come back in reverse insertion order, driven by the server-assigned
/// id rather than the stored timestamp; identical timestamps cannot reorder
/// the view.
///
/// Expected: Ok with the latest insert first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_session_with_user(db).await?;

    let repo = EventRepository::new(db);
    // Identical timestamp on purpose; only insertion order may decide.
    for event_type in ["STEALTH_BROKEN", "DAMAGE_TAKEN", "PLAYER_DEATH"] {
        repo.insert(&session.session_id, event_type, 0.0, 0.0, 1700000000000, json!({}))
            .await?;
    }

    let recent = repo.recent(100).await?;

    let types: Vec<&str> = recent.iter().map(|e| e.event_type.as_str()).collect();
    assert_eq!(types, vec!["PLAYER_DEATH", "DAMAGE_TAKEN", "STEALTH_BROKEN"]);

    Ok(())
}

/// Tests the recent view limit.
///
/// Expected: Ok with only the newest events up to the limit
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_session_with_user(db).await?;

    let repo = EventRepository::new(db);
    for event_type in ["CHECKPOINT", "ENEMY_ALERT", "LEVEL_COMPLETE"] {
        repo.insert(&session.session_id, event_type, 0.0, 0.0, 1700000000000, json!({}))
            .await?;
    }

    let recent = repo.recent(2).await?;

    let types: Vec<&str> = recent.iter().map(|e| e.event_type.as_str()).collect();
    assert_eq!(types, vec!["LEVEL_COMPLETE", "ENEMY_ALERT"]);

    Ok(())
}
