use crate::error::{config::ConfigError, AppError};

/// Retry budget used when `MEMBER_CODE_MAX_RETRIES` is not set.
pub const DEFAULT_MEMBER_CODE_MAX_RETRIES: u32 = 10;

pub struct Config {
    pub database_url: String,

    /// Candidates the member code generator tries before giving up.
    pub member_code_max_retries: u32,
}

impl Config {
    /// Loads `.env` if present, then reads configuration from the environment.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            member_code_max_retries: parse_max_retries(
                std::env::var("MEMBER_CODE_MAX_RETRIES").ok(),
            )?,
        })
    }
}

fn parse_max_retries(value: Option<String>) -> Result<u32, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_MEMBER_CODE_MAX_RETRIES);
    };

    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "MEMBER_CODE_MAX_RETRIES".to_string(),
        value: value.clone(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u32>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(retries) => Ok(retries),
        Err(e) => Err(invalid(&e.to_string())),
    }
}
