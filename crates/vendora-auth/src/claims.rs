//! Token claim structures.
//!
//! The token payload nests the identity under a `user` key:
//!
//! ```json
//! { "user": { "id": 1, "username": "alice", "role": "user" }, "iat": 1700000000, "exp": 1700003600 }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::roles::UserRole;

/// Identity of the caller as recorded at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityClaim {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
}

/// Full claims of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: IdentityClaim,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: usize,
    /// Expiration (Unix timestamp, seconds)
    pub exp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_nest_identity_under_user() {
        let claims = TokenClaims {
            user: IdentityClaim {
                id: 7,
                username: "alice".to_string(),
                role: UserRole::User,
            },
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["user"]["id"], 7);
        assert_eq!(value["user"]["username"], "alice");
        assert_eq!(value["user"]["role"], "user");
        assert_eq!(value["exp"], 1_700_003_600);
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"user":{"id":3,"username":"root","role":"admin"},"iat":10,"exp":20}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.user.role, UserRole::Admin);
        assert_eq!(claims.iat, 10);
    }
}
