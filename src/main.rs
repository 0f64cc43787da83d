use anyhow::Context;
use playlist_lookup::{
    configuration::Settings, error::format_error_details, startup::Application,
    telemetry::init_subscriber,
};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber();

    let result = run().await;
    if let Err(e) = &result {
        error!("{}", format_error_details(e));
    }
    result
}

async fn run() -> anyhow::Result<()> {
    let configuration = Settings::new().context("Failed to read configuration.")?;
    let app = Application::build(configuration)
        .await
        .context("Failed to build application.")?;
    app.run_until_stopped()
        .await
        .context("Server stopped unexpectedly.")
}
