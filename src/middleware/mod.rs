//! Middleware for request processing.
//!
//! # Modules
//!
//! - [`gate`]: the [`Gate`](gate::Gate) trait, ordered [`GateChain`](gate::GateChain)s,
//!   and the [`enforce_gates`](gate::enforce_gates) middleware that runs them
//! - [`auth`]: bearer-token authentication and the [`AuthUser`](auth::AuthUser) extractor
//! - [`role`]: exact-match role authorization
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `Authenticate` verifies the token and attaches an `AuthUser`
//!    (401 if the header is missing, 403 if the token is bad)
//! 3. `AuthorizeRole` compares the attached role (403 on mismatch)
//! 4. The handler runs only if every gate passed
//!
//! # Example
//!
//! ```ignore
//! use axum::{Handler, middleware, routing::put};
//!
//! let admin = admin_only(&state.jwt_config);
//! let route = put(update_product.layer(middleware::from_fn_with_state(admin, enforce_gates)));
//! ```

pub mod auth;
pub mod gate;
pub mod role;

use vendora_auth::UserRole;
use vendora_config::JwtConfig;

use self::auth::Authenticate;
use self::gate::GateChain;
use self::role::AuthorizeRole;

/// `[Authenticate]`
pub fn authenticated(jwt_config: &JwtConfig) -> GateChain {
    GateChain::new().then(Authenticate::new(jwt_config.clone()))
}

/// `[Authenticate, AuthorizeRole(role)]`
pub fn require_role(jwt_config: &JwtConfig, role: UserRole) -> GateChain {
    authenticated(jwt_config).then(AuthorizeRole::new(role))
}

/// `[Authenticate, AuthorizeRole(admin)]`
pub fn admin_only(jwt_config: &JwtConfig) -> GateChain {
    require_role(jwt_config, UserRole::Admin)
}
