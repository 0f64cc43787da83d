use reqwest::{Client, Response};
use tracing::{debug, instrument};

use crate::{
    configuration::ApiClientSettings,
    domain::{Endpoint, PlaylistIdentifier},
    outcome::{FetchError, RequestOutcome},
};

/// Longest error body kept for the log; anything past it is dropped.
const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// Issues playlist lookups against the configured endpoint.
///
/// Sends a bare `GET`: no auth header, no query string. Cloning is cheap
/// and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PlaylistClient {
    http_client: Client,
    endpoint: Endpoint,
}

impl PlaylistClient {
    pub fn new(endpoint: Endpoint, http_client: Client) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    #[instrument(name = "Fetching playlist", skip_all, fields(url))]
    pub async fn fetch(&self, identifier: &PlaylistIdentifier) -> RequestOutcome {
        let url = self.endpoint.request_url(identifier);
        tracing::Span::current().record("url", url.as_str());
        debug!("Sending GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped_body(response, MAX_ERROR_BODY_BYTES).await;
            return Err(FetchError::Status { status, body });
        }

        response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::MalformedPayload(e)
            } else {
                FetchError::from_transport(e)
            }
        })
    }
}

/// Reads at most `limit` bytes of the body, for logging only.
///
/// A failed read keeps whatever arrived before it.
async fn read_capped_body(mut response: Response, limit: usize) -> String {
    let mut body = Vec::new();
    while body.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(limit - body.len());
                body.extend_from_slice(&chunk[..take]);
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Stopped reading error body: {}", e);
                break;
            }
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

impl TryFrom<ApiClientSettings> for PlaylistClient {
    type Error = reqwest::Error;

    fn try_from(settings: ApiClientSettings) -> Result<Self, Self::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout_ms {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(settings.endpoint(), builder.build()?))
    }
}
