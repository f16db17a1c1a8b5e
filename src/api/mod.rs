//! Typed client for the AMBAMAX backend API.
//!
//! One `ApiClient` per process is enough; it is cheap to clone (the inner
//! `reqwest::Client` is an Arc). Endpoint groups live in the submodules,
//! split the same way the backend groups its routes.

pub mod film;
pub mod studio;
pub mod transaksi;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::ApiData;

use std::time::Duration;

/// HTTP client for the backend, with base URL and optional bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Error body the backend sends on failures: `{ "message": "..." }`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Mostly for tests: point the client at an arbitrary server.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(&ApiConfig {
            base_url: base_url.into(),
            token: None,
            timeout_seconds: 30,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Check the status line and decode the body, reporting the backend's
    /// `message` field when it sends one.
    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "Permintaan gagal".to_string());
            error!("{} returned {}: {}", path, status, message);
            return Err(ClientError::api(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// GET an endpoint wrapped in the `{ "data": ... }` envelope.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!("GET {}", path);
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Ok(Self::decode::<ApiData<T>>(path, response).await?.data)
    }

    /// POST with a JSON body, response wrapped in the envelope.
    pub(crate) async fn post_data<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!("POST {}", path);
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Ok(Self::decode::<ApiData<T>>(path, response).await?.data)
    }

    /// POST without a body, for endpoints that answer outside the envelope
    /// (the snap-token endpoint is the one case).
    pub(crate) async fn post_raw<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!("POST {}", path);
        let response = self.request(reqwest::Method::POST, path).send().await?;
        Self::decode(path, response).await
    }
}
