use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_POOL_SIZE: u32 = 32;
const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge.json";

pub struct Config {
    pub discord_token: String,

    pub database_url: String,
    pub db_pool_size: u32,

    pub knowledge_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: database_url()?,
            db_pool_size: match std::env::var("DB_POOL_SIZE") {
                Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "DB_POOL_SIZE".to_string(),
                    value,
                })?,
                Err(_) => DEFAULT_POOL_SIZE,
            },
            knowledge_path: std::env::var("KNOWLEDGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_KNOWLEDGE_PATH)),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Uses `DATABASE_URL` when set, otherwise composes a MySQL URL from the
/// individual `DB_*` connection variables.
fn database_url() -> Result<String, ConfigError> {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return Ok(url);
    }

    Ok(format!(
        "mysql://{}:{}@{}:{}/{}",
        required("DB_USERNAME")?,
        required("DB_PASSWORD")?,
        required("DB_HOST")?,
        required("DB_PORT")?,
        required("DB_DATABASE")?,
    ))
}
