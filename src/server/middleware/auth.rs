use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{AuthContext, Role},
    service::auth::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the caller of a request from its `Authorization` header.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Verifies the bearer credential without any role requirement.
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - The verified caller
    /// - `Err(AuthError::Unauthenticated)` - Header missing or not a bearer credential
    /// - `Err(AuthError::Expired | AuthError::InvalidCredential)` - Verification failed
    pub fn authenticate(&self) -> Result<AuthContext, AppError> {
        let token = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::Unauthenticated)?;

        Ok(self.tokens.verify(token)?)
    }

    /// Verifies the bearer credential and requires the caller's role to equal `role`.
    ///
    /// Roles are not hierarchical; an Admin does not pass a Ranger check.
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - The verified caller holding `role`
    /// - `Err(AuthError::Forbidden)` - Verified caller with a different role
    /// - `Err(AuthError::*)` - See [`AuthGuard::authenticate`]
    pub fn require(&self, role: Role) -> Result<AuthContext, AppError> {
        let ctx = self.authenticate()?;

        if ctx.role != role {
            return Err(AuthError::wrong_role(ctx.user_id, role).into());
        }

        Ok(ctx)
    }
}
