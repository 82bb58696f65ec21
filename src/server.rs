use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::{config::Config, error::ServerError, route::create_router, AppState};

/// Binds the configured address. A failure here is fatal for the process.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.server_bind_addr;
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Accepts connections until the process exits, one task per connection.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), ServerError> {
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Server listening on port {}", local_addr.port());

    axum::serve(listener, router).await?;
    Ok(())
}

pub async fn start(config: Config) -> Result<(), ServerError> {
    let listener = bind(&config).await?;
    let app_state = Arc::new(AppState { config });

    serve(listener, create_router(app_state)).await
}
