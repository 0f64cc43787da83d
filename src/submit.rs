use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{Instrument, Span, instrument, warn};

use crate::{
    domain::PlaylistIdentifier,
    outcome::{OutcomeSink, RequestOutcome, TracingSink},
    playlist_client::PlaylistClient,
};

/// Turns a form submission into one playlist lookup and hands the result to
/// the sink.
///
/// Holds no per-submission state. Concurrent submissions each get their own
/// request: nothing is deduplicated, cancelled or ordered.
#[derive(Clone)]
pub struct SubmitHandler {
    client: PlaylistClient,
    sink: Arc<dyn OutcomeSink>,
}

impl SubmitHandler {
    pub fn new(client: PlaylistClient, sink: Arc<dyn OutcomeSink>) -> Self {
        Self { client, sink }
    }

    pub fn with_tracing_sink(client: PlaylistClient) -> Self {
        Self::new(client, Arc::new(TracingSink))
    }

    /// Sends the lookup, waits for it to settle, records the outcome and
    /// returns it.
    #[instrument(name = "Submitting playlist lookup", skip_all, fields(playlist_id = %identifier))]
    pub async fn submit(&self, identifier: PlaylistIdentifier) -> RequestOutcome {
        if identifier.alters_url_structure() {
            warn!(
                "Playlist id '{}' is sent unescaped and changes the request URL",
                identifier
            );
        }

        let outcome = self.client.fetch(&identifier).await;
        self.sink.record(&identifier, &outcome);
        outcome
    }

    /// Runs [`SubmitHandler::submit`] on its own task and returns right away.
    ///
    /// Dropping the handle detaches the task; the request still completes
    /// and is still recorded.
    pub fn dispatch(&self, identifier: PlaylistIdentifier) -> JoinHandle<RequestOutcome> {
        let handler = self.clone();
        tokio::spawn(
            async move { handler.submit(identifier).await }.instrument(Span::current()),
        )
    }
}

impl std::fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitHandler")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
