use super::*;

/// Tests removing one reservation from a trip with several.
///
/// Expected: Ok(1) with the other reservation kept
#[tokio::test]
async fn removes_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, _, _) = factory::helpers::create_reserved_trip(db).await?;
    let other = factory::create_explorer(db).await?;
    factory::create_reservation(db, trip.id, other.id).await?;

    let removed = ReservationRepository::new(db)
        .delete_first_by_trip(trip.id)
        .await?;

    assert_eq!(removed, 1);
    assert_eq!(entity::prelude::Reservation::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests removing from a trip without reservations.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;

    let removed = ReservationRepository::new(db)
        .delete_first_by_trip(trip.id)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
