use std::any::Any;

use anyhow::anyhow;
use axum::http::{HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use vendora_config::CorsConfig;
use vendora_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::init_auth_router;
use crate::modules::products::init_products_router;
use crate::modules::status::status;
use crate::state::AppState;

pub const PRODUCTS_PATH: &str = "/api/vendor-a/products";

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/status", get(status))
        .nest("/auth", init_auth_router())
        .nest(PRODUCTS_PATH, init_products_router(&state.jwt_config))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&state.cors_config))
}

async fn route_not_found() -> AppError {
    AppError::not_found(anyhow!("route not found"))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal_error(format!("handler panicked: {}", details)).into_response()
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
