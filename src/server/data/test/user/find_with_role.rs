use super::*;

/// Tests loading a user with their role.
///
/// Expected: Ok with the role name attached
#[tokio::test]
async fn attaches_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let (user, role) = UserRepository::new(db)
        .find_with_role(ranger.id)
        .await?
        .unwrap();

    assert_eq!(user.id, ranger.id);
    assert_eq!(role.unwrap().role_name, "Ranger");

    Ok(())
}

/// Tests loading an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db)
        .find_with_role(uuid::Uuid::new_v4())
        .await?
        .is_none());

    Ok(())
}
