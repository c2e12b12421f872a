use super::*;

/// Tests listing reservations with their holders.
///
/// Expected: Ok with one holder carrying the explorer's contact details
#[tokio::test]
async fn lists_reservation_holders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, reservation) = factory::helpers::create_reserved_trip(db).await?;

    let check = TripService::new(db).check_reservations(trip.id).await?;

    assert_eq!(check.count(), 1);
    let dto = check.into_dto();
    assert!(dto.has_reservations);
    assert_eq!(dto.reservations[0].id, reservation.id);
    assert_eq!(dto.reservations[0].email, explorer.email);

    Ok(())
}

/// Tests listing reservations of an unreserved trip.
///
/// Expected: Ok with `has_reservations == false`
#[tokio::test]
async fn reports_no_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;

    let dto = TripService::new(db).check_reservations(trip.id).await?.into_dto();

    assert!(!dto.has_reservations);
    assert_eq!(dto.count, 0);

    Ok(())
}
