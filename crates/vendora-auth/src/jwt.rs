//! Signing and verification of access tokens.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Verification
//! checks the signature first and then the expiration, with no leeway: a
//! token is rejected as soon as the current time passes its `exp`.
//!
//! [`TokenError`] keeps the failure kinds apart so they can be logged, but
//! callers facing the client are expected to treat them all the same way.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use vendora_config::JwtConfig;

use crate::claims::{IdentityClaim, TokenClaims};

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("failed to sign token: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

/// Signs `identity` into a token valid for `jwt_config.access_token_expiry`
/// seconds from now.
pub fn create_access_token(
    identity: &IdentityClaim,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    create_access_token_at(identity, jwt_config, Utc::now().timestamp())
}

/// Same as [`create_access_token`] with an explicit issue time (Unix seconds).
pub fn create_access_token_at(
    identity: &IdentityClaim,
    jwt_config: &JwtConfig,
    issued_at: i64,
) -> Result<String, TokenError> {
    let claims = TokenClaims {
        user: identity.clone(),
        iat: issued_at as usize,
        exp: (issued_at + jwt_config.access_token_expiry) as usize,
    };

    encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encoding(e.to_string()))
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::UserRole;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret-key-at-least-32-characters-long")
    }

    fn alice() -> IdentityClaim {
        IdentityClaim {
            id: 1,
            username: "alice".to_string(),
            role: UserRole::User,
        }
    }

    #[test]
    fn test_create_access_token_success() {
        let token = create_access_token(&alice(), &get_test_jwt_config()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_returns_same_identity() {
        let config = get_test_jwt_config();
        let token = create_access_token(&alice(), &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.user, alice());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_keeps_admin_role() {
        let config = get_test_jwt_config();
        let admin = IdentityClaim {
            id: 2,
            username: "root".to_string(),
            role: UserRole::Admin,
        };
        let token = create_access_token(&admin, &config).unwrap();

        assert_eq!(verify_token(&token, &config).unwrap().user.role, UserRole::Admin);
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = create_access_token(&alice(), &get_test_jwt_config()).unwrap();
        let wrong_config = JwtConfig::new("different-secret-key-at-least-32-characters");

        let result = verify_token(&token, &wrong_config);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_verify_expired_token() {
        let config = get_test_jwt_config();
        let two_hours_ago = Utc::now().timestamp() - 7200;
        let token = create_access_token_at(&alice(), &config, two_hours_ago).unwrap();

        let result = verify_token(&token, &config);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_just_expired_token_has_no_leeway() {
        let config = get_test_jwt_config();
        let issued = Utc::now().timestamp() - config.access_token_expiry - 5;
        let token = create_access_token_at(&alice(), &config, issued).unwrap();

        assert!(matches!(
            verify_token(&token, &config),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_verify_malformed_token() {
        let config = get_test_jwt_config();
        assert!(matches!(
            verify_token("invalid.token.here", &config),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            verify_token("", &config),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_verify_tampered_payload() {
        let config = get_test_jwt_config();
        let token = create_access_token(&alice(), &config).unwrap();
        let admin_token = create_access_token(
            &IdentityClaim {
                role: UserRole::Admin,
                ..alice()
            },
            &config,
        )
        .unwrap();

        // Graft the admin payload onto the user token's signature.
        let parts: Vec<&str> = token.split('.').collect();
        let admin_parts: Vec<&str> = admin_token.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], admin_parts[1], parts[2]);

        assert!(matches!(
            verify_token(&forged, &config),
            Err(TokenError::InvalidSignature)
        ));
    }
}
