use super::*;

/// Tests counting reservations per trip.
///
/// Expected: Ok with counts scoped to each trip
#[tokio::test]
async fn counts_only_matching_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, busy, _, _) = factory::helpers::create_reserved_trip(db).await?;
    let (_, quiet) = factory::helpers::create_trip_with_ranger(db).await?;
    let explorer = factory::create_explorer(db).await?;
    factory::create_reservation(db, busy.id, explorer.id).await?;

    let repo = ReservationRepository::new(db);
    assert_eq!(repo.count_by_trip(busy.id).await?, 2);
    assert_eq!(repo.count_by_trip(quiet.id).await?, 0);

    Ok(())
}
