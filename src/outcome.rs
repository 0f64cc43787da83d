use hyper::StatusCode;
use serde_json::Value;
use tracing::{error, info};

use crate::{domain::PlaylistIdentifier, error::error_chain_fmt};

/// Settled result of one playlist lookup.
///
/// The payload is the decoded JSON body, passed along untouched.
pub type RequestOutcome = Result<Value, FetchError>;

#[derive(thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build the lookup request")]
    Request(#[source] reqwest::Error),
    #[error("The lookup request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("The lookup request could not reach the API")]
    Network(#[source] reqwest::Error),
    #[error("The API answered with status {status}")]
    Status { status: StatusCode, body: String },
    #[error("The API answered with a body that is not JSON")]
    MalformedPayload(#[source] reqwest::Error),
}

impl FetchError {
    /// Classifies a transport level failure from `reqwest`.
    pub fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e)
        } else if e.is_builder() {
            FetchError::Request(e)
        } else {
            FetchError::Network(e)
        }
    }
}

impl std::fmt::Debug for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        if let FetchError::Status { body, .. } = self {
            writeln!(f, "Response body:\n\t{}", body)?;
        }
        Ok(())
    }
}

/// Receives every settled lookup, exactly once per submission.
pub trait OutcomeSink: Send + Sync {
    fn record(&self, identifier: &PlaylistIdentifier, outcome: &RequestOutcome);
}

/// Writes outcomes to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn record(&self, identifier: &PlaylistIdentifier, outcome: &RequestOutcome) {
        match outcome {
            Ok(payload) => info!(
                playlist_id = %identifier,
                %payload,
                "Playlist lookup succeeded"
            ),
            Err(e) => error!(
                playlist_id = %identifier,
                error = ?e,
                "Playlist lookup failed"
            ),
        }
    }
}
