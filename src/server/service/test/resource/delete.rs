use super::*;

/// Tests deleting a resource used by two trips.
///
/// Verifies that the delete is refused while any link remains, that every blocking
/// trip is listed, and that the delete goes through once both links are removed.
///
/// Expected: ResourceInUse listing both trips, then Ok
#[tokio::test]
async fn blocks_delete_until_unlinked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tent = factory::resource::create_resource_named(db, "Tent").await?;
    let (_, trip_a) = factory::helpers::create_trip_with_ranger(db).await?;
    let (_, trip_b) = factory::helpers::create_trip_with_ranger(db).await?;
    factory::create_trip_resource(db, trip_a.id, tent.id).await?;
    factory::create_trip_resource(db, trip_b.id, tent.id).await?;

    let service = ResourceService::new(db);

    match service.delete(tent.id).await {
        Err(AppError::ResourceInUse { trips, .. }) => {
            let mut ids: Vec<_> = trips.iter().map(|t| t.id).collect();
            let mut expected = vec![trip_a.id, trip_b.id];
            ids.sort();
            expected.sort();
            assert_eq!(ids, expected);
            assert!(trips.iter().any(|t| t.name == trip_a.trip_name));
        }
        other => panic!("expected ResourceInUse, got {:?}", other),
    }

    let associations = AssociationService::new(db);
    associations.disassociate_resource(trip_a.id, tent.id).await?;

    assert!(matches!(
        service.delete(tent.id).await,
        Err(AppError::ResourceInUse { ref trips, .. }) if trips.len() == 1
    ));

    associations.disassociate_resource(trip_b.id, tent.id).await?;
    service.delete(tent.id).await?;

    assert!(entity::prelude::Resource::find_by_id(tent.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a resource that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_resource() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ResourceService::new(db).delete(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
