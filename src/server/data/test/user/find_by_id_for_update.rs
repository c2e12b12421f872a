use super::*;
use sea_orm::TransactionTrait;

/// Tests taking the ranger row lock inside a transaction and writing the aggregate
/// through the same transaction.
///
/// Verifies that the locked read returns the user, that an unknown id yields `None`,
/// and that the rating written under the lock is visible after commit.
///
/// Expected: Ok(Some(user)), Ok(None), then the committed rating
#[tokio::test]
async fn locks_and_updates_within_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let txn = db.begin().await?;
    let repo = UserRepository::new(&txn);

    let locked = repo.find_by_id_for_update(ranger.id).await?.unwrap();
    assert_eq!(locked.id, ranger.id);
    assert!(repo
        .find_by_id_for_update(uuid::Uuid::new_v4())
        .await?
        .is_none());

    repo.update_rating(ranger.id, Some(3.5)).await?;
    txn.commit().await?;

    let stored = UserRepository::new(db).find_by_id(ranger.id).await?.unwrap();
    assert_eq!(stored.rating, Some(3.5));

    Ok(())
}
