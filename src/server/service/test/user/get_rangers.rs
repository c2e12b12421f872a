use super::*;

/// Tests listing rangers.
///
/// Verifies that only active users with the Ranger role are returned.
///
/// Expected: Ok with the single active ranger
#[tokio::test]
async fn lists_only_active_rangers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::user::UserFactory::new(db, "Ranger")
        .name("Rosa", "Pinto")
        .rating(Some(4.5))
        .build()
        .await?;
    factory::user::UserFactory::new(db, "Ranger")
        .user_status("inactivo")
        .build()
        .await?;
    factory::create_explorer(db).await?;

    let rangers = UserService::new(db).get_rangers().await?;

    assert_eq!(rangers.len(), 1);
    assert_eq!(rangers[0].id, active.id);
    assert_eq!(rangers[0].full_name, "Rosa Pinto");
    assert_eq!(rangers[0].rating, Some(4.5));

    Ok(())
}

/// Tests listing rangers before the role is seeded.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_ranger_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_explorer(db).await?;

    assert!(UserService::new(db).get_rangers().await?.is_empty());

    Ok(())
}
