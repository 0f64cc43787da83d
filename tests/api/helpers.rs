use playlist_lookup::{configuration::Settings, startup::Application, telemetry::init_subscriber};
use reqwest::Url;
use std::{sync::LazyLock, time::Duration};
use tracing::instrument;
use wiremock::{MockServer, Request};

static TRACING: LazyLock<()> = LazyLock::new(|| {
    init_subscriber();
});

pub struct TestApp {
    pub address: String,
    pub api_server: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spin up an instance of our application
    /// and returns its address (i.e. http://127.0.0.1:XXXX)
    #[instrument(name = "Spawning Test App")]
    pub async fn spawn_app() -> TestApp {
        LazyLock::force(&TRACING);
        let mut config = Settings::new().expect("Failed to read configuration");
        // Launch a mock server to stand in for the music API
        let api_server = MockServer::start().await;
        config.api_client_cfg.base_url = Url::parse(&api_server.uri()).unwrap();
        config.application_cfg.host = "127.0.0.1".into();
        config.application_cfg.port = 0; // Random port

        let application = Application::build(config)
            .await
            .expect("Failed to build application.");
        let application_port = application.local_addr().unwrap().port();

        tokio::spawn(application.run_until_stopped());

        TestApp {
            address: format!("http://127.0.0.1:{}", application_port),
            api_server,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_playlists(&self, body: String) -> reqwest::Response {
        self.client
            .post(format!("{}/playlists", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Lookups run after the form is answered, so poll the mock API until
    /// `count` requests have reached it (or give up after a few seconds).
    pub async fn wait_for_api_requests(&self, count: usize) -> Vec<Request> {
        for _ in 0..100 {
            let received = self.api_server.received_requests().await.unwrap();
            if received.len() >= count {
                return received;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        self.api_server.received_requests().await.unwrap()
    }
}
