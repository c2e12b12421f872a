use super::*;

/// Tests registering a user under an existing role.
///
/// Verifies that the password is stored hashed and the account starts active.
///
/// Expected: Ok with a 64 character hex hash stored
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::user_role::find_or_create_role(db, "Explorer").await?;

    let user = UserService::new(db)
        .register(registration("ana", "ana@basecamp.test", role.id))
        .await?;

    assert_eq!(user.user_status, "activo");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_ne!(stored.password, "secreto");
    assert_eq!(stored.password.len(), 64);

    Ok(())
}

/// Tests registering a taken username.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::user_role::find_or_create_role(db, "Explorer").await?;
    let service = UserService::new(db);
    service
        .register(registration("ana", "ana@basecamp.test", role.id))
        .await?;

    let result = service
        .register(registration("ana", "other@basecamp.test", role.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering under a role that does not exist.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .register(registration("ana", "ana@basecamp.test", Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
