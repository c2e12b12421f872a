use super::*;

/// Tests the per-trip aggregate.
///
/// Expected: Ok with average rounded to one decimal and the rating count
#[tokio::test]
async fn averages_trip_scores() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    for calification in [5, 4, 4] {
        let explorer = factory::create_explorer(db).await?;
        factory::create_rating(db, trip.id, explorer.id, ranger.id, calification).await?;
    }

    let rating = RatingService::new(db).get_trip_rating(trip.id).await?;

    assert_eq!(rating.count, 3);
    assert_eq!(rating.average, 4.3);

    Ok(())
}

/// Tests the per-trip aggregate of an unrated trip.
///
/// Expected: Ok with average 0.0 and count 0
#[tokio::test]
async fn reports_zero_for_unrated_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;

    let rating = RatingService::new(db).get_trip_rating(trip.id).await?;

    assert_eq!(rating.count, 0);
    assert_eq!(rating.average, 0.0);

    Ok(())
}
