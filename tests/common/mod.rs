// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{response::Response, Router};
use delayed_json::{config::Config, route::create_router, server, AppState};
use http_body_util::BodyExt;

pub fn test_router() -> Router {
    create_router(Arc::new(AppState {
        config: Config::init(),
    }))
}

/// Spawns the full server on an ephemeral loopback port.
pub async fn spawn_app() -> SocketAddr {
    let config = Config::init().with_bind_addr(SocketAddr::from(([127, 0, 0, 1], 0)));
    let listener = server::bind(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_router(Arc::new(AppState { config }));

    tokio::spawn(async move {
        server::serve(listener, router).await.unwrap();
    });

    addr
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
