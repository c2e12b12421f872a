use super::*;

/// Tests reserving a seat for the caller.
///
/// Expected: Ok with one reservation row for the pair
#[tokio::test]
async fn creates_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let explorer = factory::create_explorer(db).await?;

    let reservation = ReservationService::new(db)
        .create(&ctx(&explorer, Role::Explorer), params(trip.id, explorer.id))
        .await?;

    assert_eq!(reservation.trip_id, trip.id);
    assert_eq!(reservation.user_id, explorer.id);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 1);

    Ok(())
}

/// Tests reserving twice on the same trip.
///
/// Verifies that a user holds at most one reservation per trip.
///
/// Expected: Err(AppError::Conflict) with one row stored
#[tokio::test]
async fn rejects_duplicate_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;

    let result = ReservationService::new(db)
        .create(&ctx(&explorer, Role::Explorer), params(trip.id, explorer.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 1);

    Ok(())
}

/// Tests reserving on behalf of another user.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn rejects_reservation_for_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let caller = factory::create_explorer(db).await?;
    let other = factory::create_explorer(db).await?;

    let result = ReservationService::new(db)
        .create(&ctx(&caller, Role::Explorer), params(trip.id, other.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));

    Ok(())
}

/// Tests reserving on a trip that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let explorer = factory::create_explorer(db).await?;

    let result = ReservationService::new(db)
        .create(&ctx(&explorer, Role::Explorer), params(Uuid::new_v4(), explorer.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
