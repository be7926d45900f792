//! # Vendora Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: listen address and admin registration policy
//! - [`cors`]: allowed origins
//!
//! [`AppConfig::from_env`] is called once at startup; the resulting values
//! are handed to the components that need them. Nothing reads the
//! environment after that.
//!
//! # Example
//!
//! ```ignore
//! use vendora_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.bind_address());
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Every configuration section the server needs, loaded together.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
