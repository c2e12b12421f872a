use super::*;

/// Tests deleting by trip when the trip has two reservations.
///
/// Verifies that only one reservation is removed per call.
///
/// Expected: Ok with one reservation left
#[tokio::test]
async fn delete_by_trip_removes_single_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, _, _) = factory::helpers::create_reserved_trip(db).await?;
    let second = factory::create_explorer(db).await?;
    factory::create_reservation(db, trip.id, second.id).await?;

    ReservationService::new(db).delete_by_trip(trip.id).await?;

    assert_eq!(
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.eq(trip.id))
            .count(db)
            .await?,
        1
    );

    Ok(())
}

/// Tests deleting by trip when the trip has no reservation.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_by_trip_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;

    let result = ReservationService::new(db).delete_by_trip(trip.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting the reservation a specific user holds.
///
/// Expected: Ok with the other user's reservation kept
#[tokio::test]
async fn delete_by_trip_and_user_targets_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    let other = factory::create_explorer(db).await?;
    let kept = factory::create_reservation(db, trip.id, other.id).await?;

    ReservationService::new(db)
        .delete_by_trip_and_user(trip.id, explorer.id)
        .await?;

    let remaining = entity::prelude::Reservation::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests deleting an unknown reservation id.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_by_id_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReservationService::new(db).delete_by_id(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
