use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use vendora_models::{
    CreateProductDto, DeleteProductResponse, ErrorResponse, LoginRequest, LoginResponse, Product,
    RegisterAdminRequest, RegisterRequest, RegisteredUser, StatusResponse, StockStatus,
    UpdateProductDto, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::status::status,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::register_admin,
        crate::modules::auth::controller::login_user,
        crate::modules::products::controller::get_products,
        crate::modules::products::controller::get_product_by_id,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::update_product,
        crate::modules::products::controller::delete_product,
    ),
    components(
        schemas(
            UserRole,
            RegisterRequest,
            RegisterAdminRequest,
            RegisteredUser,
            LoginRequest,
            LoginResponse,
            StockStatus,
            Product,
            CreateProductDto,
            UpdateProductDto,
            DeleteProductResponse,
            StatusResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Status", description = "Liveness probe"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Products", description = "Vendor A product catalogue")
    ),
    info(
        title = "Vendora API",
        version = "0.1.0",
        description = "Vendor A product catalogue API with JWT authentication and role-gated writes.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/status",
            "/auth/register",
            "/auth/register-admin",
            "/auth/login",
            "/api/vendor-a/products",
            "/api/vendor-a/products/{kd_produk}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
