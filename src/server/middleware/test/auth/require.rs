use super::*;

/// Tests a caller holding the required role.
///
/// Expected: Ok(AuthContext)
#[test]
fn grants_matching_role() {
    let tokens = TokenService::new(SECRET);
    let headers = bearer(&tokens.issue(&claims("Ranger", Duration::hours(1))));

    let ctx = AuthGuard::new(&tokens, &headers).require(Role::Ranger).unwrap();

    assert_eq!(ctx.role, Role::Ranger);
}

/// Tests an Explorer calling a Ranger operation.
///
/// Expected: Err(AuthError::Forbidden)
#[test]
fn denies_other_role() {
    let tokens = TokenService::new(SECRET);
    let headers = bearer(&tokens.issue(&claims("Explorer", Duration::hours(1))));

    let result = AuthGuard::new(&tokens, &headers).require(Role::Ranger);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));
}

/// Tests an Admin calling a Ranger operation.
///
/// Verifies that roles are compared for equality, not rank.
///
/// Expected: Err(AuthError::Forbidden)
#[test]
fn admin_does_not_inherit_ranger() {
    let tokens = TokenService::new(SECRET);
    let headers = bearer(&tokens.issue(&claims("Admin", Duration::hours(1))));

    let result = AuthGuard::new(&tokens, &headers).require(Role::Ranger);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden { .. }))
    ));
}
