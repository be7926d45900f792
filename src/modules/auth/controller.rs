use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use vendora_core::AppError;
use vendora_models::{
    ErrorResponse, LoginRequest, LoginResponse, RegisterAdminRequest, RegisterRequest,
    RegisteredUser,
};

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user account
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisteredUser),
        (status = 400, description = "Validation error or username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisteredUser>), AppError> {
    let user = AuthService::register_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Register a new administrator account
#[utoipa::path(
    post,
    path = "/auth/register-admin",
    request_body = RegisterAdminRequest,
    responses(
        (status = 201, description = "Administrator registered", body = RegisteredUser),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Admin key rejected", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterAdminRequest>,
) -> Result<(StatusCode, Json<RegisteredUser>), AppError> {
    let user = AuthService::register_admin(&state.db, dto, &state.server_config).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
