use super::*;

/// Tests a partial trip update.
///
/// Verifies that only the columns present in the params are written and the status
/// label is never touched by a structural edit.
///
/// Expected: Ok with cost changed and every other column unchanged
#[tokio::test]
async fn writes_only_present_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let trip = factory::trip::TripFactory::new(db, ranger.id)
        .trip_name("Ojos del Salado")
        .trip_status("Confirmado")
        .total_cost(900.0)
        .build()
        .await?;

    let updated = TripRepository::new(db)
        .update(
            trip.id,
            UpdateTripParams {
                total_cost: Some(950.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.total_cost, 950.0);
    assert_eq!(updated.trip_name, "Ojos del Salado");

    let stored = entity::prelude::Trip::find_by_id(trip.id).one(db).await?.unwrap();
    assert_eq!(stored.trip_status, "Confirmado");
    assert_eq!(stored.start_date, trip.start_date);
    assert_eq!(stored.lead_ranger, ranger.id);

    Ok(())
}
