use super::*;

/// Tests closing an open session.
///
/// Verifies that the end time and reported duration land on the row and that
/// exactly one row is affected.
///
/// Expected: Ok(1) with end time and duration set
#[tokio::test]
async fn sets_end_time_and_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_session_with_user(db).await?;

    let repo = SessionRepository::new(db);
    let affected = repo.close(&session.session_id, 1700000005000, 120).await?;

    assert_eq!(affected, 1);

    let closed = repo.find_by_id(&session.session_id).await?.unwrap();
    assert_eq!(closed.end_time, Some(1700000005000));
    assert_eq!(closed.duration_seconds, 120);

    Ok(())
}

/// Tests closing a session that does not exist.
///
/// Verifies that the update affects zero rows and returns no error; callers
/// treat this as an informational no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unknown_session_affects_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let affected = repo.close("no-such-session", 1700000005000, 42).await?;

    assert_eq!(affected, 0);

    Ok(())
}

/// Tests re-closing an already closed session.
///
/// A retried end submission overwrites the end time and duration rather than
/// erroring; the session stays terminal.
///
/// Expected: Ok(1) with the later values stored
#[tokio::test]
async fn reclose_overwrites_previous_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_session_with_user(db).await?;

    let repo = SessionRepository::new(db);
    repo.close(&session.session_id, 1700000005000, 120).await?;
    let affected = repo.close(&session.session_id, 1700000009000, 150).await?;

    assert_eq!(affected, 1);

    let closed = repo.find_by_id(&session.session_id).await?.unwrap();
    assert_eq!(closed.end_time, Some(1700000009000));
    assert_eq!(closed.duration_seconds, 150);

    Ok(())
}
