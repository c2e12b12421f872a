use super::*;

/// Tests deleting a trip with links, payments and ratings but no reservation.
///
/// Verifies that every dependent row is removed with the trip and that the lead
/// ranger's aggregate is recomputed from what remains.
///
/// Expected: Ok with link counts reported and no rows left for the trip
#[tokio::test]
async fn deletes_trip_with_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::user::UserFactory::new(db, "Ranger")
        .rating(Some(4.0))
        .build()
        .await?;
    let trip = factory::create_trip(db, ranger.id).await?;
    let explorer = factory::create_explorer(db).await?;

    let first = factory::create_activity(db).await?;
    let second = factory::create_activity(db).await?;
    factory::create_activity_trip(db, trip.id, first.id).await?;
    factory::create_activity_trip(db, trip.id, second.id).await?;
    let resource = factory::create_resource(db).await?;
    factory::create_trip_resource(db, trip.id, resource.id).await?;
    factory::create_payment(db, trip.id, explorer.id, 50.0).await?;
    factory::create_rating(db, trip.id, explorer.id, ranger.id, 4).await?;

    let deletion = TripService::new(db)
        .delete(&ctx(&ranger, Role::Ranger), trip.id)
        .await?;

    assert_eq!(deletion.activities_removed, 2);
    assert_eq!(deletion.resources_removed, 1);
    assert!(entity::prelude::Trip::find_by_id(trip.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::ActivityTrip::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TripResource::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::RangerCalification::find().count(db).await?, 0);

    // Linked catalog rows survive.
    assert!(entity::prelude::Activity::find_by_id(first.id).one(db).await?.is_some());
    assert!(entity::prelude::Resource::find_by_id(resource.id).one(db).await?.is_some());

    let ranger = entity::prelude::User::find_by_id(ranger.id).one(db).await?.unwrap();
    assert!(ranger.rating.is_none());

    Ok(())
}

/// Tests deleting a reserved trip.
///
/// Verifies that nothing is removed when the trip has a reservation.
///
/// Expected: Err(AppError::Conflict) with trip and links intact
#[tokio::test]
async fn refuses_delete_of_reserved_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ranger, trip, _, _) = factory::helpers::create_reserved_trip(db).await?;
    let activity = factory::create_activity(db).await?;
    factory::create_activity_trip(db, trip.id, activity.id).await?;

    let result = TripService::new(db)
        .delete(&ctx(&ranger, Role::Ranger), trip.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(entity::prelude::Trip::find_by_id(trip.id).one(db).await?.is_some());
    assert_eq!(
        entity::prelude::ActivityTrip::find()
            .filter(entity::activity_trip::Column::TripId.eq(trip.id))
            .count(db)
            .await?,
        1
    );

    Ok(())
}

/// Tests deleting an unreserved trip as a ranger who does not lead it.
///
/// Expected: Err(AuthError::Forbidden) with the trip and its links intact
#[tokio::test]
async fn refuses_delete_by_other_ranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let activity = factory::create_activity(db).await?;
    factory::create_activity_trip(db, trip.id, activity.id).await?;
    let other_ranger = factory::create_ranger(db).await?;

    let result = TripService::new(db)
        .delete(&ctx(&other_ranger, Role::Ranger), trip.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));
    assert!(entity::prelude::Trip::find_by_id(trip.id).one(db).await?.is_some());
    assert_eq!(entity::prelude::ActivityTrip::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a trip that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let result = TripService::new(db)
        .delete(&ctx(&ranger, Role::Ranger), uuid::Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting one of two rated trips led by the same ranger.
///
/// Verifies that the recomputed aggregate only counts ratings on the remaining trip.
///
/// Expected: Ok with ranger rating equal to the surviving trip's score
#[tokio::test]
async fn recomputes_rating_from_remaining_trips() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let kept = factory::create_trip(db, ranger.id).await?;
    let removed = factory::create_trip(db, ranger.id).await?;
    let explorer = factory::create_explorer(db).await?;
    factory::create_rating(db, kept.id, explorer.id, ranger.id, 2).await?;
    factory::create_rating(db, removed.id, explorer.id, ranger.id, 5).await?;

    TripService::new(db)
        .delete(&ctx(&ranger, Role::Ranger), removed.id)
        .await?;

    let ranger = entity::prelude::User::find_by_id(ranger.id).one(db).await?.unwrap();
    assert_eq!(ranger.rating, Some(2.0));

    Ok(())
}
