use serde::Deserialize;
use std::env;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub payment: PaymentConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Backend API settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token for authenticated endpoints, when already logged in.
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

// Payment status polling settings
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub poll_max_attempts: u32,
    pub poll_interval_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "ambamax_client=debug".to_string()),
            },
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
                token: env::var("API_TOKEN").ok(),
                timeout_seconds: env::var("API_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("API_TIMEOUT_SECONDS must be a valid number"),
            },
            payment: PaymentConfig {
                poll_max_attempts: env::var("PAYMENT_POLL_MAX_ATTEMPTS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("PAYMENT_POLL_MAX_ATTEMPTS must be a valid number"),
                poll_interval_seconds: env::var("PAYMENT_POLL_INTERVAL_SECONDS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .expect("PAYMENT_POLL_INTERVAL_SECONDS must be a valid number"),
            },
        }
    }
}
