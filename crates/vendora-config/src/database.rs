//! PostgreSQL connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (required). TLS is controlled through
//!   the `sslmode` query parameter, e.g. `?sslmode=require` for hosted
//!   databases.
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)

use anyhow::Context;
use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5),
        })
    }
}
