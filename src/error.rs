use thiserror::Error;

/// Unified error type for the client.
///
/// Aggregates low-level transport and decoding failures into actionable,
/// high-level categories.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected status code {status}")]
    UnexpectedStatus { status: u16 },

    /// The endpoint answered `200` with a literal `null` body: no resource
    /// exists under the requested ID.
    #[error("no resource found for id {id}")]
    NotFound { id: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Every fetch in a batch failed. Carries all contributing failures.
    #[error("error resolving batch: {0}")]
    Batch(#[from] crate::batch::BatchFailure),
}

impl Error {
    /// Create a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an error for a non-success response status.
    pub fn unexpected_status(status: reqwest::StatusCode) -> Self {
        Error::UnexpectedStatus {
            status: status.as_u16(),
        }
    }

    /// True for the per-identifier "no such resource" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
