use super::*;

/// Tests merging extended biography fields.
///
/// Verifies that keys absent from the update keep their stored values.
///
/// Expected: Ok with both old and new keys present
#[tokio::test]
async fn merges_biography_extend() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let caller = ctx(&ranger, Role::Ranger);
    let service = UserService::new(db);

    service
        .update_profile(
            &caller,
            ranger.id,
            UpdateProfileParams {
                biography_extend: Some(BiographyExtend {
                    languages: Some(vec!["es".to_string(), "en".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await?;
    let user = service
        .update_profile(
            &caller,
            ranger.id,
            UpdateProfileParams {
                biography: Some("Guide since 2015".to_string()),
                biography_extend: Some(BiographyExtend {
                    experience_years: Some(9),
                    ..Default::default()
                }),
            },
        )
        .await?;

    let extend = user.biography_extend.unwrap();
    assert_eq!(extend.languages, Some(vec!["es".to_string(), "en".to_string()]));
    assert_eq!(extend.experience_years, Some(9));
    assert_eq!(user.biography.as_deref(), Some("Guide since 2015"));

    Ok(())
}

/// Tests editing another user's profile.
///
/// Expected: Err(AuthError::Forbidden)
#[tokio::test]
async fn refuses_foreign_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;
    let other = factory::create_ranger(db).await?;

    let result = UserService::new(db)
        .update_profile(
            &ctx(&ranger, Role::Ranger),
            other.id,
            UpdateProfileParams {
                biography: Some("hijacked".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));

    Ok(())
}

/// Tests a negative experience value.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_negative_experience() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ranger = factory::create_ranger(db).await?;

    let result = UserService::new(db)
        .update_profile(
            &ctx(&ranger, Role::Ranger),
            ranger.id,
            UpdateProfileParams {
                biography_extend: Some(BiographyExtend {
                    experience_years: Some(-2),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
