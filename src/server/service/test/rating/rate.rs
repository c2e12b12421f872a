use super::*;

/// Tests a first rating by a reserved explorer.
///
/// Expected: Ok with the ranger's aggregate equal to the score
#[tokio::test]
async fn rates_trip_and_updates_ranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;

    let outcome = RatingService::new(db)
        .rate(&ctx(&explorer, Role::Explorer), score(ranger.id, trip.id, 4))
        .await?;

    assert_eq!(outcome.rating.calification, 4);
    assert_eq!(outcome.ranger_rating, Some(4.0));
    assert_eq!(stored_rating(db, ranger.id).await?, Some(4.0));

    Ok(())
}

/// Tests rating the same trip twice.
///
/// Verifies that the second rating replaces the first instead of adding a row.
///
/// Expected: Ok with one row holding score 5
#[tokio::test]
async fn rerating_replaces_previous_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    let caller = ctx(&explorer, Role::Explorer);
    let service = RatingService::new(db);

    service.rate(&caller, score(ranger.id, trip.id, 4)).await?;
    service.rate(&caller, score(ranger.id, trip.id, 5)).await?;

    let rows = entity::prelude::RangerCalification::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].calification, 5);
    assert_eq!(stored_rating(db, ranger.id).await?, Some(5.0));

    Ok(())
}

/// Tests the aggregate across several trips led by one ranger.
///
/// Verifies that the stored value is the exact mean over every rating on every trip
/// the ranger leads.
///
/// Expected: Ok with rating == 13 / 3
#[tokio::test]
async fn aggregates_mean_across_trips() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let first = factory::create_trip(db, ranger.id).await?;
    let second = factory::create_trip(db, ranger.id).await?;
    let alice = factory::create_explorer(db).await?;
    let bruno = factory::create_explorer(db).await?;
    factory::create_reservation(db, first.id, alice.id).await?;
    factory::create_reservation(db, first.id, bruno.id).await?;
    factory::create_reservation(db, second.id, alice.id).await?;

    let service = RatingService::new(db);
    service
        .rate(&ctx(&alice, Role::Explorer), score(ranger.id, first.id, 5))
        .await?;
    service
        .rate(&ctx(&bruno, Role::Explorer), score(ranger.id, first.id, 4))
        .await?;
    let outcome = service
        .rate(&ctx(&alice, Role::Explorer), score(ranger.id, second.id, 4))
        .await?;

    let expected = 13.0 / 3.0;
    assert!((outcome.ranger_rating.unwrap() - expected).abs() < 1e-9);
    assert!((stored_rating(db, ranger.id).await?.unwrap() - expected).abs() < 1e-9);

    let summary = service.get_ranger_rating(ranger.id).await?;
    assert_eq!(summary.count, 3);

    Ok(())
}

/// Tests scores outside 1..=5 after a valid rating is on record.
///
/// Verifies that an out-of-range score neither overwrites the stored rating nor
/// moves the ranger's aggregate.
///
/// Expected: Err(AppError::BadRequest), rating row and ranger rating unchanged
#[tokio::test]
async fn rejects_out_of_range_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    let caller = ctx(&explorer, Role::Explorer);
    let service = RatingService::new(db);

    service.rate(&caller, score(ranger.id, trip.id, 4)).await?;

    for bad in [0, 6, -3] {
        let result = service.rate(&caller, score(ranger.id, trip.id, bad)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let rows = entity::prelude::RangerCalification::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].calification, 4);
    assert_eq!(stored_rating(db, ranger.id).await?, Some(4.0));

    Ok(())
}

/// Tests rating without a reservation on the trip.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn rejects_rater_without_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let explorer = factory::create_explorer(db).await?;

    let result = RatingService::new(db)
        .rate(&ctx(&explorer, Role::Explorer), score(ranger.id, trip.id, 3))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));

    Ok(())
}

/// Tests a rater whose stored role is not Explorer.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn rejects_non_explorer_rater() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let other_ranger = factory::create_ranger(db).await?;
    factory::create_reservation(db, trip.id, other_ranger.id).await?;

    let result = RatingService::new(db)
        .rate(&ctx(&other_ranger, Role::Explorer), score(ranger.id, trip.id, 3))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));

    Ok(())
}

/// Tests rating with a `ranger_id` that does not lead the trip.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_mismatched_ranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    let other_ranger = factory::create_ranger(db).await?;

    let result = RatingService::new(db)
        .rate(&ctx(&explorer, Role::Explorer), score(other_ranger.id, trip.id, 3))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
