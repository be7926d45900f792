use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{info, instrument};

use vendora_core::AppError;
use vendora_models::{CreateProductDto, DeleteProductResponse, ErrorResponse, Product, UpdateProductDto};

use super::service::ProductService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/vendor-a/products",
    responses(
        (status = 200, description = "All products ordered by kd_produk", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_products(&state.db).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/vendor-a/products/{kd_produk}",
    params(
        ("kd_produk" = String, Path, description = "Product code")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(kd_produk): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::get_product(&state.db, &kd_produk).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/vendor-a/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Token not found", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 409, description = "kd_produk already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Products"
)]
#[instrument(skip(state, auth_user, dto), fields(actor = %auth_user.username()))]
pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = ProductService::create_product(&state.db, dto).await?;
    info!(kd_produk = %product.kd_produk, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/vendor-a/products/{kd_produk}",
    params(
        ("kd_produk" = String, Path, description = "Product code")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Token not found", body = ErrorResponse),
        (status = 403, description = "Invalid token or insufficient role", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Products"
)]
#[instrument(skip(state, auth_user, dto), fields(actor = %auth_user.username()))]
pub async fn update_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(kd_produk): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateProductDto>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::update_product(&state.db, &kd_produk, dto).await?;
    info!(kd_produk = %product.kd_produk, "Product updated");
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/vendor-a/products/{kd_produk}",
    params(
        ("kd_produk" = String, Path, description = "Product code")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteProductResponse),
        (status = 401, description = "Token not found", body = ErrorResponse),
        (status = 403, description = "Invalid token or insufficient role", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Products"
)]
#[instrument(skip(state, auth_user), fields(actor = %auth_user.username()))]
pub async fn delete_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(kd_produk): Path<String>,
) -> Result<Json<DeleteProductResponse>, AppError> {
    let deleted_product = ProductService::delete_product(&state.db, &kd_produk).await?;
    info!(kd_produk = %deleted_product.kd_produk, "Product deleted");

    Ok(Json(DeleteProductResponse {
        message: format!("Product {} deleted", deleted_product.kd_produk),
        deleted_product,
    }))
}
