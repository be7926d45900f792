use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::warn;

use vendora_auth::{TokenClaims, UserRole, verify_token};
use vendora_config::JwtConfig;
use vendora_core::AppError;

use crate::middleware::gate::Gate;
use crate::state::AppState;

pub const TOKEN_NOT_FOUND: &str = "token not found";
pub const INVALID_TOKEN: &str = "invalid or expired token";

/// The verified identity of the caller, attached to the request extensions
/// by [`Authenticate`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub TokenClaims);

impl AuthUser {
    pub fn user_id(&self) -> i32 {
        self.0.user.id
    }

    pub fn username(&self) -> &str {
        &self.0.user.username
    }

    pub fn role(&self) -> UserRole {
        self.0.user.role
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.0.user.role == role
    }
}

/// Gate that requires a valid bearer token.
///
/// - no `Authorization: Bearer <token>` header: 401 "token not found"
/// - token fails verification for any reason: 403 "invalid or expired token"
/// - otherwise the decoded identity is inserted as an [`AuthUser`] extension
#[derive(Debug, Clone)]
pub struct Authenticate {
    jwt_config: JwtConfig,
}

impl Authenticate {
    pub fn new(jwt_config: JwtConfig) -> Self {
        Self { jwt_config }
    }

    pub fn identify(&self, headers: &HeaderMap) -> Result<AuthUser, AppError> {
        let token =
            bearer_token(headers).ok_or_else(|| AppError::unauthorized(TOKEN_NOT_FOUND))?;

        let claims = verify_token(token, &self.jwt_config).map_err(|err| {
            warn!(error = %err, "Token verification failed");
            AppError::forbidden(INVALID_TOKEN)
        })?;

        Ok(AuthUser(claims))
    }
}

impl Gate for Authenticate {
    fn name(&self) -> &'static str {
        "authenticate"
    }

    fn check(&self, parts: &mut Parts) -> Result<(), AppError> {
        let auth_user = self.identify(&parts.headers)?;
        parts.extensions.insert(auth_user);
        Ok(())
    }
}

/// Extracts `<token>` from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Handlers behind an [`Authenticate`] gate read the identity it attached.
/// Elsewhere the extractor verifies the header itself.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        Authenticate::new(state.jwt_config.clone()).identify(&parts.headers)
    }
}
