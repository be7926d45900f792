use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_user, register_admin, register_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/register-admin", post(register_admin))
        .route("/login", post(login_user))
}
