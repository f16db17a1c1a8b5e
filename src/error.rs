use thiserror::Error;

/// Errors surfaced by the API client and the booking flow.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad TLS, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response body for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// One of the two seat fetches failed, so no grid was built.
    #[error("failed to load seats: {0}")]
    SeatLoad(Box<ClientError>),

    /// The flow was entered without a film/showtime in place.
    #[error("data booking tidak lengkap")]
    IncompleteBooking,
}

impl ClientError {
    /// Fallback message used when the server sends no structured error body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
        }
    }
}
