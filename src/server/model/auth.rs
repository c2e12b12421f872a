//! Caller identity resolved from a bearer credential.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One of the three seeded user roles.
///
/// Role checks compare for equality; there is no hierarchy between roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Explorer,
    Ranger,
    Admin,
}

impl Role {
    /// The `user_roles.role_name` value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Explorer => "Explorer",
            Role::Ranger => "Ranger",
            Role::Admin => "Admin",
        }
    }

    /// Resolves a role from its stored name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Explorer" => Some(Role::Explorer),
            "Ranger" => Some(Role::Ranger),
            "Admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried by a bearer credential.
///
/// Unknown claims in the payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub role_name: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: usize,
}

/// Authenticated caller passed explicitly into every lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: Role,
}
