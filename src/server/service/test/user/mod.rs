use super::*;
use crate::server::{
    model::user::{BiographyExtend, RegisterUserParams, UpdateProfileParams},
    service::{certification::CertificationService, user::UserService},
};
use uuid::Uuid;

mod certification;
mod get_rangers;
mod register;
mod update_profile;

fn registration(username: &str, email: &str, role_id: Uuid) -> RegisterUserParams {
    RegisterUserParams {
        username: username.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Rojas".to_string(),
        nationality: Some("CL".to_string()),
        rut: None,
        passport_number: None,
        role_id,
        biography: None,
        email: email.to_string(),
        password: "secreto".to_string(),
    }
}
