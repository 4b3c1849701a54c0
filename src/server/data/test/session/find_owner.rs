use super::*;

/// Tests looking up the owner of an existing session.
///
/// Expected: Ok(Some(user_id))
#[tokio::test]
async fn returns_owning_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, session) = factory::helpers::create_session_with_user(db).await?;

    let repo = SessionRepository::new(db);
    let owner = repo.find_owner(&session.session_id).await?;

    assert_eq!(owner, Some(user.user_id));

    Ok(())
}

/// Tests looking up the owner of an unknown session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_session_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_telemetry_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let owner = repo.find_owner("no-such-session").await?;

    assert_eq!(owner, None);

    Ok(())
}
