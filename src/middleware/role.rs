//! Role-based authorization.
//!
//! Roles are compared by exact equality. An admin is not implicitly allowed
//! on a route gated to `user`.

use axum::http::request::Parts;

use vendora_auth::UserRole;
use vendora_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::middleware::gate::Gate;

pub const INSUFFICIENT_ROLE: &str = "insufficient role";

/// Gate that requires the identity attached by
/// [`Authenticate`](crate::middleware::auth::Authenticate) to hold `role`.
///
/// Must run after `Authenticate` in the same chain. A request that reaches it
/// without an identity is rejected like a role mismatch.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizeRole {
    required: UserRole,
}

impl AuthorizeRole {
    pub fn new(required: UserRole) -> Self {
        Self { required }
    }

    pub fn admin() -> Self {
        Self::new(UserRole::Admin)
    }
}

impl Gate for AuthorizeRole {
    fn name(&self) -> &'static str {
        "authorize_role"
    }

    fn check(&self, parts: &mut Parts) -> Result<(), AppError> {
        check_role(parts.extensions.get::<AuthUser>(), self.required)
    }
}

/// Helper for checking a role in controller logic.
///
/// ```rust,ignore
/// check_role(Some(&auth_user), UserRole::Admin)?;
/// ```
pub fn check_role(auth_user: Option<&AuthUser>, required_role: UserRole) -> Result<(), AppError> {
    match auth_user {
        Some(user) if user.has_role(required_role) => Ok(()),
        Some(user) => {
            tracing::debug!(
                username = %user.username(),
                role = %user.role(),
                required = %required_role,
                "Role check failed"
            );
            Err(AppError::forbidden(INSUFFICIENT_ROLE))
        }
        None => Err(AppError::forbidden(INSUFFICIENT_ROLE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Request;
    use axum::http::StatusCode;
    use vendora_auth::{IdentityClaim, TokenClaims};

    fn auth_user(role: UserRole) -> AuthUser {
        AuthUser(TokenClaims {
            user: IdentityClaim {
                id: 1,
                username: "alice".to_string(),
                role,
            },
            iat: 1234567890,
            exp: 9999999999,
        })
    }

    fn parts_with(user: Option<AuthUser>) -> Parts {
        let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();
        if let Some(user) = user {
            parts.extensions.insert(user);
        }
        parts
    }

    #[test]
    fn test_check_role_exact_match() {
        assert!(check_role(Some(&auth_user(UserRole::Admin)), UserRole::Admin).is_ok());
        assert!(check_role(Some(&auth_user(UserRole::User)), UserRole::User).is_ok());
    }

    #[test]
    fn test_check_role_no_hierarchy() {
        let err = check_role(Some(&auth_user(UserRole::Admin)), UserRole::User).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);

        let err = check_role(Some(&auth_user(UserRole::User)), UserRole::Admin).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), INSUFFICIENT_ROLE);
    }

    #[test]
    fn test_check_role_without_identity() {
        let err = check_role(None, UserRole::Admin).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), INSUFFICIENT_ROLE);
    }

    #[test]
    fn test_gate_passes_admin() {
        let mut parts = parts_with(Some(auth_user(UserRole::Admin)));
        assert!(AuthorizeRole::admin().check(&mut parts).is_ok());
    }

    #[test]
    fn test_gate_rejects_user_on_admin_route() {
        let mut parts = parts_with(Some(auth_user(UserRole::User)));
        let err = AuthorizeRole::admin().check(&mut parts).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_gate_rejects_missing_identity() {
        let mut parts = parts_with(None);
        let err = AuthorizeRole::new(UserRole::User)
            .check(&mut parts)
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
