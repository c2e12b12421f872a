use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{AuthContext, Role},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod payment;
mod rating;
mod reservation;
mod resource;
mod trip;
mod user;

/// Builds the caller context for a factory-created user.
fn ctx(user: &entity::user::Model, role: Role) -> AuthContext {
    AuthContext {
        user_id: user.id,
        role,
    }
}
