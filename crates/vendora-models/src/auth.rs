//! Authentication DTOs.
//!
//! Usernames are case-insensitive: [`RegisterRequest::normalized_username`]
//! and friends lowercase them before they reach the store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

impl RegisterRequest {
    pub fn normalized_username(&self) -> String {
        self.username.to_lowercase()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterAdminRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    /// Checked only when the server has an admin registration key configured.
    #[serde(rename = "adminKey", default)]
    pub admin_key: Option<String>,
}

impl RegisterAdminRequest {
    pub fn normalized_username(&self) -> String {
        self.username.to_lowercase()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn normalized_username(&self) -> String {
        self.username.to_lowercase()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Public view of a freshly created account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RegisteredUser {
    pub id: i32,
    pub username: String,
}
