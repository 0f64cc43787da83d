use axum::{Form, extract::State, response::IntoResponse};
use hyper::StatusCode;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{domain::PlaylistIdentifier, submit::SubmitHandler};

#[derive(Deserialize)]
pub struct PlaylistFormData {
    #[serde(rename = "playlist-id", default)]
    playlist_id: String,
}

/// Form submission endpoint.
///
/// Always answers `204 No Content`, which keeps the browser on the form page,
/// and leaves the lookup running in the background.
#[instrument(
    name = "Playlist form submitted",
    skip_all,
    fields(playlist_id = %form.playlist_id, submission_id = %Uuid::new_v4())
)]
pub async fn submit_playlist(
    State(handler): State<SubmitHandler>,
    Form(form): Form<PlaylistFormData>,
) -> impl IntoResponse {
    info!("Dispatching lookup for playlist '{}'", form.playlist_id);
    // Detached: the response does not wait for the lookup to settle.
    drop(handler.dispatch(PlaylistIdentifier::from(form.playlist_id)));
    StatusCode::NO_CONTENT
}
