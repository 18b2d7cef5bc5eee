use crate::errors::AppError;
use crate::torn::DEFAULT_BASE_URL;

const PLACEHOLDER_KEY: &str = "put-your-key-here";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Reads `TORN_API_KEY` and the optional `TORN_API_BASE_URL`.
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var("TORN_API_KEY").unwrap_or_default();
        let base_url = std::env::var("TORN_API_BASE_URL").ok();
        Self::from_values(api_key, base_url)
    }

    pub fn from_values(api_key: String, base_url: Option<String>) -> Result<Self, AppError> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() || api_key == PLACEHOLDER_KEY {
            return Err(AppError::Config("Set TORN_API_KEY in .env".into()));
        }

        let base_url = base_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
