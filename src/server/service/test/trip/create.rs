use super::*;
use chrono::{Duration, Utc};
use uuid::Uuid;

fn params(lead_ranger: Uuid) -> CreateTripParams {
    let today = Utc::now().date_naive();
    CreateTripParams {
        trip_name: "Torres del Paine W".to_string(),
        lead_ranger,
        start_date: today + Duration::days(10),
        end_date: today + Duration::days(14),
        participants_number: 6,
        trip_status: "pending".to_string(),
        estimated_weather_forecast: String::new(),
        description: "Five day trek".to_string(),
        total_cost: 1200.0,
        trip_image_url: String::new(),
    }
}

/// Tests creating a trip led by a ranger.
///
/// Verifies that the service stores the trip with the given lead ranger.
///
/// Expected: Ok with trip persisted
#[tokio::test]
async fn creates_trip_for_ranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let trip = TripService::new(db).create(params(ranger.id)).await?;

    assert_eq!(trip.lead_ranger, ranger.id);
    assert_eq!(trip.trip_name, "Torres del Paine W");
    assert!(entity::prelude::Trip::find_by_id(trip.id).one(db).await?.is_some());

    Ok(())
}

/// Tests creating a trip whose lead ranger is an explorer.
///
/// Verifies that `lead_ranger` must hold the Ranger role.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_lead_ranger_without_ranger_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let explorer = factory::create_explorer(db).await?;

    let result = TripService::new(db).create(params(explorer.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Trip::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a trip for a lead ranger that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_lead_ranger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TripService::new(db).create(params(Uuid::new_v4())).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating a trip that ends before it starts.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inverted_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let mut params = params(ranger.id);
    std::mem::swap(&mut params.start_date, &mut params.end_date);

    let result = TripService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
