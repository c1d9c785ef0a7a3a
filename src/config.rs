//! Runtime configuration loaded from the environment

use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub request_timeout_seconds: u64,
    pub cms: CmsConfig,
}

/// Connection settings for the headless CMS
#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub api_url: String,
    pub dataset: String,
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            app_name: env_or("APP_NAME", "Caribstays Web"),
            environment: env_or("ENVIRONMENT", "development"),
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse_or("PORT", 8080),
            api_prefix: normalize_prefix(&env_or("API_PREFIX", "/api")),
            cors_origins: parse_csv(&env_or("CORS_ORIGINS", "http://localhost:3000")),
            request_timeout_seconds: env_parse_or("REQUEST_TIMEOUT_SECONDS", 30),
            cms: CmsConfig {
                api_url: env_or("CMS_API_URL", "http://localhost:3333/v1")
                    .trim_end_matches('/')
                    .to_string(),
                dataset: env_or("CMS_DATASET", "production"),
                token: env_opt("CMS_TOKEN"),
                timeout_seconds: env_parse_or("CMS_TIMEOUT_SECONDS", 10),
            },
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CmsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_opt(key)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn normalize_prefix(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
