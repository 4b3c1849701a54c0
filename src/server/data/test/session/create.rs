use super::*;

/// Tests creating a session for an existing user.
///
/// Verifies that the repository inserts an open session: no end time and a
/// zero duration until the session is closed.
///
/// Expected: Ok with an open session row
#[tokio::test]
async fn creates_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SessionRepository::new(db);
    let session = repo
        .create("s1", &user.user_id, 1700000000000, "Windows 11")
        .await?;

    assert_eq!(session.session_id, "s1");
    assert_eq!(session.user_id, user.user_id);
    assert_eq!(session.start_time, 1700000000000);
    assert_eq!(session.end_time, None);
    assert_eq!(session.duration_seconds, 0);

    Ok(())
}

/// Tests creating a session with an already used id.
///
/// Verifies that the primary-key collision surfaces as a datastore error
/// instead of being silently ignored.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn duplicate_session_id_errors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SessionRepository::new(db);
    repo.create("s1", &user.user_id, 1700000000000, "Windows 11")
        .await?;
    let result = repo
        .create("s1", &user.user_id, 1700000000001, "Windows 11")
        .await;

    assert!(result.is_err());

    Ok(())
}
