use super::*;

/// Tests confirming an existing payment.
///
/// Expected: Ok with status `Confirmado` and amount kept
#[tokio::test]
async fn updates_existing_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    factory::create_payment(db, trip.id, explorer.id, 80.0).await?;

    let payment = PaymentService::new(db)
        .upsert_status(UpsertPaymentStatusParams {
            trip_id: trip.id,
            user_id: explorer.id,
            status: PaymentStatus::Confirmado,
        })
        .await?;

    assert_eq!(payment.status, "Confirmado");
    assert_eq!(payment.amount, Some(80.0));
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 1);

    Ok(())
}

/// Tests setting a status when no payment exists yet.
///
/// Expected: Ok with a status-only row created
#[tokio::test]
async fn creates_status_only_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    let service = PaymentService::new(db);

    service
        .upsert_status(UpsertPaymentStatusParams {
            trip_id: trip.id,
            user_id: explorer.id,
            status: PaymentStatus::Rechazado,
        })
        .await?;

    let stored = service.get_by_trip_and_user(trip.id, explorer.id).await?;
    assert_eq!(stored.status, "Rechazado");
    assert!(stored.amount.is_none());

    Ok(())
}

/// Tests listing payments for a trip that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn listing_unknown_trip_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentService::new(db).get_by_trip(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
