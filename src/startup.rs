use anyhow::Context;
use axum::{
    Router,
    http::{HeaderName, Request, StatusCode},
    routing::{get, post},
};
use std::{net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{debug, error, info, info_span, instrument};

use crate::{
    configuration::Settings,
    playlist_client::PlaylistClient,
    routes::{health_check, home, not_found, submit_playlist},
    state::AppState,
    submit::SubmitHandler,
};

const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Application {
    listener: TcpListener,
    pub app: Router,
}

impl Application {
    #[instrument(name = "Building Application", skip_all)]
    pub async fn build(
        Settings {
            application_cfg,
            api_client_cfg,
        }: Settings,
    ) -> anyhow::Result<Self> {
        info!("Building application.");
        debug!("API client configuration: {:?}", api_client_cfg);
        let client =
            PlaylistClient::try_from(api_client_cfg).context("Failed to build the HTTP client")?;
        info!("Playlist lookups go to {}", client.endpoint());

        let listener = application_cfg
            .listener()
            .await
            .with_context(|| format!("Failed to bind {}", application_cfg.address()))?;
        debug!("Listener bound to {:?}", listener.local_addr());

        let app = Self::get_router(AppState {
            submit_handler: SubmitHandler::with_tracing_sink(client),
        });

        Ok(Self { listener, app })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn get_router(app_state: AppState) -> Router {
        let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let request_id = request.headers().get(REQUEST_ID_HEADER);

                    match request_id {
                        Some(request_id) => info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = ?request_id,
                        ),
                        None => {
                            error!("could not extract request_id");
                            info_span!("http_request")
                        }
                    }
                }),
            )
            // send headers from request to response headers
            .layer(PropagateRequestIdLayer::new(x_request_id));

        Router::new()
            .route("/", get(home))
            .route("/health_check", get(health_check))
            .route("/playlists", post(submit_playlist))
            .fallback(not_found)
            .with_state(app_state)
            .layer(middleware)
            .layer(request_timeout_layer(REQUEST_TIMEOUT))
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let Application { listener, app } = self;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Inbound requests running past `timeout` are answered with `408`.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received.");
}
