//! Gate behaviour on protected routes. Every request here is rejected before
//! the handler runs, so the router uses a pool that never connects.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{json_request, send, setup_offline_app, test_jwt_config, token_for};
use vendora_auth::{IdentityClaim, UserRole, create_access_token, create_access_token_at};
use vendora_config::JwtConfig;

fn product_body() -> serde_json::Value {
    json!({ "kd_produk": "P1", "nm_brg": "Pensil 2B", "hrg": "3500", "ket_stok": "ada" })
}

fn update_body() -> serde_json::Value {
    json!({ "nm_brg": "Pensil 2B", "hrg": "3500", "ket_stok": "ada" })
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

#[tokio::test]
async fn test_create_without_header_is_unauthorized() {
    let app = setup_offline_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/api/vendor-a/products", None, Some(product_body())),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "token not found" }));
}

#[tokio::test]
async fn test_update_and_delete_without_header_are_unauthorized() {
    let app = setup_offline_app();

    let (status, _) = send(
        &app,
        json_request("PUT", "/api/vendor-a/products/P1", None, Some(update_body())),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, json_request("DELETE", "/api/vendor-a/products/P1", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = setup_offline_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/api/vendor-a/products", Some("garbage"), Some(product_body())),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "invalid or expired token" }));
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let app = setup_offline_app();
    let identity = IdentityClaim {
        id: 1,
        username: "alice".to_string(),
        role: UserRole::Admin,
    };
    let token = create_access_token_at(&identity, &test_jwt_config(), unix_now() - 7200).unwrap();

    let (status, body) = send(
        &app,
        json_request("DELETE", "/api/vendor-a/products/P1", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "invalid or expired token");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_forbidden() {
    let app = setup_offline_app();
    let identity = IdentityClaim {
        id: 1,
        username: "mallory".to_string(),
        role: UserRole::Admin,
    };
    let token = create_access_token(&identity, &JwtConfig::new("not-the-server-secret")).unwrap();

    let (status, _) = send(
        &app,
        json_request("PUT", "/api/vendor-a/products/P1", Some(&token), Some(update_body())),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_user_token_on_admin_routes_is_forbidden() {
    let app = setup_offline_app();
    let token = token_for(1, "alice", UserRole::User);

    let (status, body) = send(
        &app,
        json_request("PUT", "/api/vendor-a/products/P1", Some(&token), Some(update_body())),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "insufficient role" }));

    let (status, _) = send(
        &app,
        json_request("DELETE", "/api/vendor-a/products/P1", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_gates_run_before_body_validation() {
    let app = setup_offline_app();
    let token = token_for(1, "alice", UserRole::User);

    let (status, _) = send(
        &app,
        json_request("PUT", "/api/vendor-a/products/P1", Some(&token), Some(json!({}))),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = setup_offline_app();

    let (status, body) = send(&app, json_request("GET", "/status", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "API Vendor A is running" }));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_offline_app();

    let (status, body) = send(&app, json_request("GET", "/api/vendor-b/products", None, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "route not found" }));
}

#[tokio::test]
async fn test_wrong_method_on_known_path_is_route_not_found() {
    let app = setup_offline_app();
    let token = token_for(1, "root", UserRole::Admin);

    for (method, uri) in [
        ("PATCH", "/api/vendor-a/products/P1"),
        ("POST", "/status"),
        ("DELETE", "/api/vendor-a/products"),
        ("GET", "/auth/login"),
        ("PUT", "/auth/register"),
    ] {
        let (status, body) = send(&app, json_request(method, uri, Some(&token), None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, json!({ "error": "route not found" }), "{method} {uri}");
    }
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_offline_app();

    let (status, body) = send(&app, json_request("GET", "/api-docs/openapi.json", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/vendor-a/products").is_some());
}
