use super::*;

/// Tests editing a trip with no reservations as its lead ranger.
///
/// Expected: Ok with the new name stored
#[tokio::test]
async fn edits_unreserved_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip) = factory::helpers::create_trip_with_ranger(db).await?;

    let updated = TripService::new(db)
        .update(&ctx(&ranger, Role::Ranger), trip.id, rename("Renamed"))
        .await?;

    assert_eq!(updated.trip_name, "Renamed");
    assert_eq!(updated.start_date, trip.start_date);

    let stored = entity::prelude::Trip::find_by_id(trip.id).one(db).await?.unwrap();
    assert_eq!(stored.trip_name, "Renamed");

    Ok(())
}

/// Tests editing a trip that has a reservation.
///
/// Verifies that the edit is refused and the stored row is left untouched.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn refuses_edit_of_reserved_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip, _, _) = factory::helpers::create_reserved_trip(db).await?;

    let result = TripService::new(db)
        .update(&ctx(&ranger, Role::Ranger), trip.id, rename("Renamed"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let stored = entity::prelude::Trip::find_by_id(trip.id).one(db).await?.unwrap();
    assert_eq!(stored.trip_name, trip.trip_name);

    Ok(())
}

/// Tests editing a trip as a ranger who does not lead it.
///
/// Verifies that ownership is checked before the reservation gate, so a reserved trip
/// reports Forbidden rather than Conflict to a foreign ranger.
///
/// Expected: Err(AuthError::Forbidden) for both trips, names unchanged
#[tokio::test]
async fn refuses_edit_by_other_ranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, open_trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let (_, reserved_trip, _, _) = factory::helpers::create_reserved_trip(db).await?;
    let other_ranger = factory::create_ranger(db).await?;
    let caller = ctx(&other_ranger, Role::Ranger);
    let service = TripService::new(db);

    for trip in [&open_trip, &reserved_trip] {
        let result = service.update(&caller, trip.id, rename("Hijacked")).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::Forbidden { user_id, .. }))
                if user_id == other_ranger.id
        ));

        let stored = entity::prelude::Trip::find_by_id(trip.id).one(db).await?.unwrap();
        assert_eq!(stored.trip_name, trip.trip_name);
    }

    Ok(())
}

/// Tests the edit, cancel, edit sequence.
///
/// Verifies that removing the only reservation unblocks the edit.
///
/// Expected: Conflict first, then Ok after the reservation is deleted
#[tokio::test]
async fn edit_succeeds_after_reservation_removed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip, _, _) = factory::helpers::create_reserved_trip(db).await?;
    let caller = ctx(&ranger, Role::Ranger);
    let service = TripService::new(db);

    let blocked = service.update(&caller, trip.id, rename("Blocked")).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    crate::server::service::reservation::ReservationService::new(db)
        .delete_by_trip(trip.id)
        .await?;

    let updated = service.update(&caller, trip.id, rename("Unblocked")).await?;
    assert_eq!(updated.trip_name, "Unblocked");

    Ok(())
}

/// Tests editing a trip that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let result = TripService::new(db)
        .update(&ctx(&ranger, Role::Ranger), uuid::Uuid::new_v4(), rename("x"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an edit that moves the end date before the stored start date.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_end_before_stored_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip) = factory::helpers::create_trip_with_ranger(db).await?;

    let result = TripService::new(db)
        .update(
            &ctx(&ranger, Role::Ranger),
            trip.id,
            UpdateTripParams {
                end_date: Some(trip.start_date - chrono::Duration::days(1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests renaming a trip to an empty or whitespace-only name.
///
/// Verifies that the stored name is kept.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_trip_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let service = TripService::new(db);

    for blank in ["", "   "] {
        let result = service
            .update(&ctx(&ranger, Role::Ranger), trip.id, rename(blank))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let stored = entity::prelude::Trip::find_by_id(trip.id).one(db).await?.unwrap();
    assert_eq!(stored.trip_name, trip.trip_name);

    Ok(())
}
