use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use vendora::logging::init_tracing;
use vendora::router::init_router;
use vendora::state::init_app_state;
use vendora::vendora_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing().context("Failed to initialise tracing")?;

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    if config.server.admin_registration_key.is_none() {
        warn!("ADMIN_REGISTRATION_KEY is not set; /auth/register-admin is open to anyone");
    }

    let state = init_app_state(&config)
        .await
        .context("Failed to connect to the database")?;
    let app = init_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Server listening");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
