use axum::{http::Uri, response::IntoResponse};
use hyper::StatusCode;
use tracing::{instrument, warn};

#[instrument(name = "Unknown route")]
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    warn!("No route for {}", uri);
    (StatusCode::NOT_FOUND, "Not Found")
}
