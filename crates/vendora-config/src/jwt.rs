use anyhow::Context;
use std::env;

use crate::env_or;

/// Lifetime of an access token in seconds (one hour).
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        Ok(Self {
            secret,
            access_token_expiry: env_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY),
        })
    }
}
