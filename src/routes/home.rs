use axum::response::{Html, IntoResponse};
use tracing::instrument;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Playlist lookup</title>
</head>
<body>
    <form id="playlist-input" method="post" action="/playlists">
        <label for="playlist-id">Playlist id</label>
        <input id="playlist-id" name="playlist-id" type="text">
        <button type="submit">Look up</button>
    </form>
</body>
</html>
"#;

#[instrument(name = "Home page")]
pub async fn home() -> impl IntoResponse {
    Html(HOME_PAGE)
}
