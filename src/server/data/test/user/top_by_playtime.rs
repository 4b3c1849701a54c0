use super::*;

/// Tests the descending playtime ranking.
///
/// Verifies that [50, 200, 10, 200] ranks both 200-second users first in some
/// stable order, followed by 50 and 10.
///
/// Expected: Ok with totals [200, 200, 50, 10]
#[tokio::test]
async fn orders_users_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for playtime in [50, 200, 10, 200] {
        UserFactory::new(db).total_playtime(playtime).build().await?;
    }

    let repo = UserRepository::new(db);
    let ranked = repo.top_by_playtime(20).await?;

    let totals: Vec<i64> = ranked.iter().map(|u| u.total_playtime).collect();
    assert_eq!(totals, vec![200, 200, 50, 10]);

    Ok(())
}

/// Tests the ranking limit.
///
/// Verifies that only the requested number of users comes back, keeping the
/// highest totals.
///
/// Expected: Ok with the top 2 totals only
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for playtime in [10, 40, 30, 20] {
        UserFactory::new(db).total_playtime(playtime).build().await?;
    }

    let repo = UserRepository::new(db);
    let ranked = repo.top_by_playtime(2).await?;

    let totals: Vec<i64> = ranked.iter().map(|u| u.total_playtime).collect();
    assert_eq!(totals, vec![40, 30]);

    Ok(())
}
