use mediacat_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, storage, catalog, routes)
    let (_state, router) = mediacat_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    mediacat_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
