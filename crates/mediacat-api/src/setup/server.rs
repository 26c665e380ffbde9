//! Server startup and graceful shutdown

use anyhow::Result;
use axum::Router;
use mediacat_core::{Config, MediaKind};

/// Start the server with graceful shutdown
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.server_port);
    tracing::info!(addr = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let max_image_mb = config.max_size_bytes_for(MediaKind::Image) / 1024 / 1024;
    let max_video_mb = config.max_size_bytes_for(MediaKind::Video) / 1024 / 1024;
    let max_pdf_mb = config.max_size_bytes_for(MediaKind::Pdf) / 1024 / 1024;
    tracing::info!(
        max_image_mb,
        max_video_mb,
        max_pdf_mb,
        images_per_request = MediaKind::Image.upload_batch_limit(),
        videos_per_request = MediaKind::Video.upload_batch_limit(),
        pdfs_per_request = MediaKind::Pdf.upload_batch_limit(),
        storage_backend = %config.storage_backend,
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Signal handler for graceful shutdown
///
/// Listens for Ctrl+C (SIGINT) and SIGTERM signals to initiate graceful shutdown.
///
/// # Panics
/// - Panics if Ctrl+C signal handler cannot be installed (unrecoverable system error)
/// - On Unix systems, panics if SIGTERM signal handler cannot be installed (unrecoverable system error)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal");
        },
    }

    tracing::info!("Shutting down gracefully...");
}
