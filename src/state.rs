use sqlx::PgPool;

use vendora_config::{AppConfig, CorsConfig, JwtConfig, ServerConfig};
use vendora_db::{StoreError, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub server_config: ServerConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state(config: &AppConfig) -> Result<AppState, StoreError> {
    Ok(AppState {
        db: init_db_pool(&config.database).await?,
        jwt_config: config.jwt.clone(),
        server_config: config.server.clone(),
        cors_config: config.cors.clone(),
    })
}
