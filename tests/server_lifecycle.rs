//! End-to-end tests over a real TCP listener.

use std::sync::Arc;
use std::time::Duration;

use portfolio_site::config::SiteConfig;
use portfolio_site::routing::{self, NavigationTarget, Navigator};

mod common;

#[tokio::test]
async fn test_serves_pages_over_tcp() {
    let (addr, shutdown, handle) = common::start_server(SiteConfig::default()).await;

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build().unwrap();
    let res = client.get(format!("http://{}/projects", addr)).send().await.expect("Site unreachable");
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("<title>Projects</title>"));

    let res = client.get(format!("http://{}/nonexistent", addr)).send().await.unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_navigation_session_against_shared_router() {
    let router = Arc::new(routing::build());

    // Two sessions over one router keep independent histories
    let mut first = Navigator::new(router.clone());
    let mut second = Navigator::new(router);

    let entry = first.push(NavigationTarget::name("game")).unwrap();
    assert_eq!(entry.path, "/game");
    assert_eq!(entry.href, "/game");

    second.push(NavigationTarget::path("/projects")).unwrap();
    assert_eq!(first.current().path, "/game");
    assert_eq!(second.current().resolution.route().map(|r| r.name), Some("projects"));
}
