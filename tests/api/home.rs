use crate::helpers::TestApp;

#[tokio::test]
async fn home_serves_the_playlist_form() {
    let app = TestApp::spawn_app().await;

    let response = app.get("").await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"<form id="playlist-input" method="post" action="/playlists">"#));
    assert!(page.contains(r#"name="playlist-id""#));
}

#[tokio::test]
async fn home_does_not_call_the_music_api() {
    let app = TestApp::spawn_app().await;

    app.get("").await;

    assert!(app.api_server.received_requests().await.unwrap().is_empty());
}
