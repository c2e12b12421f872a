use super::*;

/// Tests listing the trips that reference a resource.
///
/// Expected: Ok with id and name of the linked trip only
#[tokio::test]
async fn lists_linked_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tent = factory::create_resource(db).await?;
    let stove = factory::create_resource(db).await?;
    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let (_, other) = factory::helpers::create_trip_with_ranger(db).await?;
    factory::create_trip_resource(db, trip.id, tent.id).await?;
    factory::create_trip_resource(db, other.id, stove.id).await?;

    let blocking = TripResourceRepository::new(db)
        .get_blocking_trips(tent.id)
        .await?;

    assert_eq!(blocking.len(), 1);
    assert_eq!(blocking[0].id, trip.id);
    assert_eq!(blocking[0].name, trip.trip_name);

    Ok(())
}

/// Tests a resource no trip uses.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unused_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tent = factory::create_resource(db).await?;

    assert!(TripResourceRepository::new(db)
        .get_blocking_trips(tent.id)
        .await?
        .is_empty());

    Ok(())
}
