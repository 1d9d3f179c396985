use std::net::SocketAddr;
use std::sync::Arc;

use crate::{repository::RecordStore, router::create_router};

/// Run the dashboard API server until shutdown.
pub async fn run_server(
    store: Arc<dyn RecordStore>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend_api=debug,tower_http=debug".into()),
        )
        .init();

    let app = create_router(store);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    tracing::info!("Serving dashboard API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
