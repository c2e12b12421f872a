//! Bearer credential verification.

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use std::sync::Arc;

use crate::server::{
    error::auth::AuthError,
    model::auth::{AuthContext, Claims, Role},
};

/// Verifies HS256-signed bearer credentials against the shared secret.
///
/// Issuing credentials is out of scope for this service; it only checks signature,
/// expiry and the role claim.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<[u8]>,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Arc::from(secret.as_bytes()),
        }
    }

    /// Resolves the caller behind a bearer credential.
    ///
    /// # Arguments
    /// - `token` - The raw credential, without the `Bearer ` prefix
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - Signature valid, not expired, and the role claim names a known role
    /// - `Err(AuthError::Expired)` - The `exp` claim is in the past
    /// - `Err(AuthError::InvalidCredential)` - Bad signature, malformed claims or unknown role
    pub fn verify(&self, token: &str) -> Result<AuthContext, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &DecodingKey::from_secret(&self.secret), &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidCredential(e.to_string()),
            })?;

        let role = Role::from_name(&data.claims.role_name).ok_or_else(|| {
            AuthError::InvalidCredential(format!("unknown role '{}'", data.claims.role_name))
        })?;

        Ok(AuthContext {
            user_id: data.claims.user_id,
            role,
        })
    }

    /// Signs claims with the service secret, for tests that need a valid credential.
    #[cfg(test)]
    pub fn issue(&self, claims: &Claims) -> String {
        use jsonwebtoken::{encode, EncodingKey, Header};

        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .expect("failed to sign test credential")
    }
}
