use super::*;

/// Tests changing the status of a reserved trip.
///
/// Verifies that status changes are not gated by reservations.
///
/// Expected: Ok with the new status stored
#[tokio::test]
async fn sets_status_on_reserved_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip, _, _) = factory::helpers::create_reserved_trip(db).await?;

    let updated = TripService::new(db)
        .set_status(&ctx(&ranger, Role::Ranger), trip.id, "Confirmado".to_string())
        .await?;

    assert_eq!(updated.trip_status, "Confirmado");
    assert_eq!(updated.trip_name, trip.trip_name);

    Ok(())
}

/// Tests changing the status of a trip as a ranger who does not lead it.
///
/// Expected: Err(AuthError::Forbidden) with the stored status unchanged
#[tokio::test]
async fn refuses_status_change_by_other_ranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let other_ranger = factory::create_ranger(db).await?;

    let result = TripService::new(db)
        .set_status(&ctx(&other_ranger, Role::Ranger), trip.id, "Cancelado".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));

    let stored = entity::prelude::Trip::find_by_id(trip.id).one(db).await?.unwrap();
    assert_eq!(stored.trip_status, trip.trip_status);

    Ok(())
}

/// Tests changing the status of a trip that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let result = TripService::new(db)
        .set_status(&ctx(&ranger, Role::Ranger), uuid::Uuid::new_v4(), "Cancelado".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
