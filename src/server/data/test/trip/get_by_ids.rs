use super::*;

/// Tests fetching trips by a list of ids.
///
/// Expected: Ok with only the requested trips
#[tokio::test]
async fn returns_requested_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let first = factory::create_trip(db, ranger.id).await?;
    factory::create_trip(db, ranger.id).await?;
    let third = factory::create_trip(db, ranger.id).await?;

    let trips = TripRepository::new(db)
        .get_by_ids(vec![first.id, third.id])
        .await?;

    let mut ids: Vec<_> = trips.iter().map(|t| t.id).collect();
    let mut expected = vec![first.id, third.id];
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests fetching with an empty id list.
///
/// Expected: Ok with no trips
#[tokio::test]
async fn returns_nothing_for_empty_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    factory::create_trip(db, ranger.id).await?;

    assert!(TripRepository::new(db).get_by_ids(vec![]).await?.is_empty());

    Ok(())
}
