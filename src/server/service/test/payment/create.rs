use super::*;

/// Tests recording a payment.
///
/// Expected: Ok with status `Pendiente`
#[tokio::test]
async fn records_pending_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;

    let payment = PaymentService::new(db)
        .create(payment(trip.id, explorer.id, 150.0))
        .await?;

    assert_eq!(payment.amount, Some(150.0));
    assert_eq!(payment.status, "Pendiente");

    Ok(())
}

/// Tests submitting a second payment for the same trip.
///
/// Verifies that the existing row is replaced and put back to review.
///
/// Expected: Ok with one row holding the new amount and `Pendiente`
#[tokio::test]
async fn replaces_existing_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    let service = PaymentService::new(db);

    let first = service.create(payment(trip.id, explorer.id, 100.0)).await?;
    service
        .upsert_status(UpsertPaymentStatusParams {
            trip_id: trip.id,
            user_id: explorer.id,
            status: PaymentStatus::Rechazado,
        })
        .await?;
    let second = service.create(payment(trip.id, explorer.id, 120.0)).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.amount, Some(120.0));
    assert_eq!(second.status, "Pendiente");
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 1);

    Ok(())
}

/// Tests a zero amount.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;

    let result = PaymentService::new(db)
        .create(payment(trip.id, explorer.id, 0.0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests paying for a trip that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let explorer = factory::create_explorer(db).await?;

    let result = PaymentService::new(db)
        .create(payment(Uuid::new_v4(), explorer.id, 10.0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the insert path racing a concurrent submission for the same trip and user.
///
/// Verifies that the unique violation raised by the second insert surfaces as a
/// conflict rather than a database error, and that the first row survives.
///
/// Expected: Err(AppError::Conflict) with one stored payment
#[tokio::test]
async fn concurrent_insert_surfaces_as_conflict() -> Result<(), AppError> {
    use crate::server::data::payment::PaymentRepository;

    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip, explorer, _) = factory::helpers::create_reserved_trip(db).await?;
    let repo = PaymentRepository::new(db);

    repo.create(payment(trip.id, explorer.id, 100.0)).await?;
    let result = repo
        .create(payment(trip.id, explorer.id, 120.0))
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "duplicate"));

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = repo.get_by_trip(trip.id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount, Some(100.0));

    Ok(())
}
