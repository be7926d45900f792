use axum::Json;

use vendora_models::StatusResponse;

pub const STATUS_MESSAGE: &str = "API Vendor A is running";

/// Liveness probe. Never touches the database.
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse)
    ),
    tag = "Status"
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_MESSAGE.to_string(),
    })
}
