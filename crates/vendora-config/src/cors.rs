use std::env;

#[derive(Clone, Debug, Default)]
pub struct CorsConfig {
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_list(&env::var("ALLOWED_ORIGINS").unwrap_or_default())
    }

    fn from_list(list: &str) -> Self {
        let allowed_origins = list
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}
