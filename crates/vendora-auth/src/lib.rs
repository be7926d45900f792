//! # Vendora Auth
//!
//! Identity types and token utilities:
//!
//! - [`roles`]: the [`UserRole`] enum shared by tokens, the users table, and
//!   the role gate
//! - [`claims`]: the identity embedded in a token and the full token claims
//! - [`jwt`]: signing and verification
//!
//! Tokens are stateless. The role inside a token is trusted until the token
//! expires, even if the user row changes in the meantime.
//!
//! # Example
//!
//! ```ignore
//! use vendora_auth::{IdentityClaim, UserRole, create_access_token, verify_token};
//! use vendora_config::JwtConfig;
//!
//! let config = JwtConfig::new("test-secret");
//! let identity = IdentityClaim { id: 1, username: "alice".into(), role: UserRole::User };
//!
//! let token = create_access_token(&identity, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user, identity);
//! ```

pub mod claims;
pub mod jwt;
pub mod roles;

// Re-export commonly used types at crate root
pub use claims::{IdentityClaim, TokenClaims};
pub use jwt::{TokenError, create_access_token, create_access_token_at, verify_token};
pub use roles::UserRole;
