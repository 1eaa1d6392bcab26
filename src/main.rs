use hf_extract_relay::chat::HttpChatClient;
use hf_extract_relay::config::{RelayConfig, ServerConfig};
use hf_extract_relay::logging::init_tracing;
use hf_extract_relay::server::{self, AppState};
use hf_extract_relay::service::ExtractionService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    let dotenv_path = dotenvy::dotenv().ok();
    init_tracing();
    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "Loaded .env file");
    }

    let config = Arc::new(RelayConfig::from_env());
    if config.endpoint().is_err() {
        warn!("Chat completion endpoint is not fully configured; /process will return 500");
    }
    let server_config = ServerConfig::from_env()?;

    let backend = Arc::new(HttpChatClient::new(config.timeout)?);
    let service = ExtractionService::new(config, backend);
    let app = server::router(AppState::new(service));

    let listener = TcpListener::bind(server_config.bind_addr).await?;
    info!(addr = %server_config.bind_addr, "hf-extract-relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
