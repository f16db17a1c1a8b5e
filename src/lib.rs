pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod models;
pub mod seatmap;
pub mod services;

use std::sync::Arc;

// Shared state for the whole application
pub struct AppState {
    pub api: api::ApiClient,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, error::ClientError> {
        let api = api::ApiClient::from_config(&config.api)?;
        Ok(Arc::new(Self { api, config }))
    }
}
