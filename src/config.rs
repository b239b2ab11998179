use std::path::PathBuf;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding `<name>.html` templates and their `static/`
    /// companion files.
    pub components_dir: PathBuf,
    /// User whose trade history the trade-summary page shows until real
    /// accounts exist.
    pub default_user: String,
    pub http_port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            components_dir: PathBuf::from(env_or("COMPONENTS_DIR", "components")),
            default_user: env_or("DEFAULT_USER", "user1"),
            http_port: env_or("HTTP_PORT", "3000").parse()?,
            log_level: env_or("LOG_LEVEL", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
