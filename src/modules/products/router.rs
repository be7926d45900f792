use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::get,
};

use vendora_config::JwtConfig;

use crate::middleware::gate::enforce_gates;
use crate::middleware::{admin_only, authenticated};
use crate::state::AppState;

use super::controller::{
    create_product, delete_product, get_product_by_id, get_products, update_product,
};

/// Reads are public. Creating needs any valid token; updating and deleting
/// need an admin token.
pub fn init_products_router(jwt_config: &JwtConfig) -> Router<AppState> {
    let signed_in = middleware::from_fn_with_state(authenticated(jwt_config), enforce_gates);
    let admin = middleware::from_fn_with_state(admin_only(jwt_config), enforce_gates);

    Router::new()
        .route(
            "/",
            get(get_products).post(create_product.layer(signed_in)),
        )
        .route(
            "/{kd_produk}",
            get(get_product_by_id)
                .put(update_product.layer(admin.clone()))
                .delete(delete_product.layer(admin)),
        )
}
