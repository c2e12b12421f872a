use super::*;
use crate::server::model::certification::CreateCertificationParams;
use chrono::NaiveDate;

fn wfr(user_id: Uuid, issued: &str, expires: &str) -> CreateCertificationParams {
    CreateCertificationParams {
        user_id,
        name: "Wilderness First Responder".to_string(),
        issuing_body: Some("NOLS".to_string()),
        issued_at: NaiveDate::parse_from_str(issued, "%Y-%m-%d").ok(),
        expires_at: NaiveDate::parse_from_str(expires, "%Y-%m-%d").ok(),
    }
}

/// Tests adding a certification to one's own profile.
///
/// Expected: Ok with the certification listed for the ranger
#[tokio::test]
async fn adds_own_certification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let service = CertificationService::new(db);

    service
        .create(
            &ctx(&ranger, Role::Ranger),
            wfr(ranger.id, "2024-01-10", "2027-01-10"),
        )
        .await?;

    let listed = service.get_by_user(ranger.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Wilderness First Responder");

    Ok(())
}

/// Tests a certification that expires before it was issued.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inverted_validity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let result = CertificationService::new(db)
        .create(
            &ctx(&ranger, Role::Ranger),
            wfr(ranger.id, "2024-01-10", "2023-01-10"),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
