use super::*;

/// Tests linking an activity to a trip twice.
///
/// Verifies that the second link is refused and exactly one row exists.
///
/// Expected: Ok then Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_activity_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let activity = factory::create_activity(db).await?;
    let service = AssociationService::new(db);

    service.associate_activity(trip.id, activity.id).await?;
    let second = service.associate_activity(trip.id, activity.id).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::ActivityTrip::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking an unknown activity to an unknown trip.
///
/// Verifies that the activity is reported first.
///
/// Expected: Err(AppError::NotFound) naming the activity
#[tokio::test]
async fn checks_activity_before_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssociationService::new(db)
        .associate_activity(Uuid::new_v4(), Uuid::new_v4())
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert!(message.contains("Activity")),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests listing and removing a trip's activities.
///
/// Expected: Ok with the activity listed, then NotFound on a second removal
#[tokio::test]
async fn lists_and_removes_activity_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let activity = factory::create_activity(db).await?;
    factory::create_activity_trip(db, trip.id, activity.id).await?;
    let service = AssociationService::new(db);

    let listed = service.get_trip_activities(trip.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, activity.id);

    service.disassociate_activity(trip.id, activity.id).await?;
    let again = service.disassociate_activity(trip.id, activity.id).await;

    assert!(matches!(again, Err(AppError::NotFound(_))));
    assert!(service.get_trip_activities(trip.id).await?.is_empty());

    Ok(())
}
