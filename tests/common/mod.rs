//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use portfolio_site::config::SiteConfig;
use portfolio_site::http::HttpServer;
use portfolio_site::lifecycle::Shutdown;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Send one GET request through the in-process application.
#[allow(dead_code)]
pub async fn get(server: &HttpServer, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    server.app().oneshot(request).await.unwrap()
}

/// Collect a response body as UTF-8 text.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start a real server on an ephemeral port. Returns its address and the
/// shutdown handle plus the server task.
#[allow(dead_code)]
pub async fn start_server(
    config: SiteConfig,
) -> (SocketAddr, Shutdown, tokio::task::JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown, handle)
}
