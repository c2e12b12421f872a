use super::*;

/// Tests linking a resource to a trip twice.
///
/// Expected: Ok then Err(AppError::Conflict) with one row stored
#[tokio::test]
async fn rejects_duplicate_resource_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let resource = factory::create_resource(db).await?;
    let service = AssociationService::new(db);

    let link = service.associate_resource(trip.id, resource.id).await?;
    assert_eq!(link.resource_id, resource.id);

    let second = service.associate_resource(trip.id, resource.id).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::TripResource::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking an unknown resource to an unknown trip.
///
/// Verifies that the trip is reported first.
///
/// Expected: Err(AppError::NotFound) naming the trip
#[tokio::test]
async fn checks_trip_before_resource() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssociationService::new(db)
        .associate_resource(Uuid::new_v4(), Uuid::new_v4())
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert!(message.contains("Trip")),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Tests removing a resource link that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_resource_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_ranger(db).await?;
    let resource = factory::create_resource(db).await?;

    let result = AssociationService::new(db)
        .disassociate_resource(trip.id, resource.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
