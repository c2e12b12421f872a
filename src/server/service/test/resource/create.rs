use super::*;

fn tent() -> CreateResourceParams {
    CreateResourceParams {
        name: "Tent".to_string(),
        description: ResourceDescription {
            summary: Some("Four season tent".to_string()),
            quantity: Some(4),
            ..Default::default()
        },
        cost: 35.0,
    }
}

/// Tests creating a resource with a structured description.
///
/// Expected: Ok with the description stored as JSON
#[tokio::test]
async fn creates_resource() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resource = ResourceService::new(db).create(tent()).await?;

    assert_eq!(resource.name, "Tent");
    assert_eq!(resource.description.quantity, Some(4));

    let stored = entity::prelude::Resource::find_by_id(resource.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description["summary"], "Four season tent");

    Ok(())
}

/// Tests creating two resources with the same name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ResourceService::new(db);
    service.create(tent()).await?;
    let result = service.create(tent()).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Resource::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a resource with a negative quantity.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_negative_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = tent();
    params.description.quantity = Some(-1);

    let result = ResourceService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
