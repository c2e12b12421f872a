use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::auth::{Claims, Role},
    service::auth::TokenService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use uuid::Uuid;

mod require;

const SECRET: &str = "test-secret";

fn claims(role_name: &str, expires_in: Duration) -> Claims {
    Claims {
        user_id: Uuid::new_v4(),
        role_name: role_name.to_string(),
        exp: (Utc::now() + expires_in).timestamp() as usize,
    }
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
