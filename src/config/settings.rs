use serde::Deserialize;

use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub debug: bool,
    pub log_level: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 8000),
            database_url: env::get(EnvKey::DatabaseUrl)?,
            debug: env::get_parsed(EnvKey::Debug, false),
            log_level: env::get_or(EnvKey::LogLevel, "info"),
        })
    }
}
