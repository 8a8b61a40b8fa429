//! End-to-end tests against a listening server.

use canvas_router::RouterConfig;
use reqwest::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_serves_canvas_routes() {
    let server = common::start_server(RouterConfig::default()).await;
    let client = common::client();

    for (path, action) in [("/", "new"), ("/release", "release"), ("/canvas/new", "new"), ("/canvas/release", "release")] {
        let res = client.get(server.url(path)).send().await.expect("server unreachable");
        assert_eq!(res.status(), StatusCode::OK, "GET {path}");
        assert!(res.headers().contains_key("x-request-id"));

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["controller"], "canvas");
        assert_eq!(body["action"], action);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = common::start_server(RouterConfig::default()).await;
    let client = common::client();

    let res = client.get(server.url("/unknown")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "No route matches [GET] \"/unknown\"");

    let res = client.post(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn test_head_uses_get_route() {
    let server = common::start_server(RouterConfig::default()).await;
    let client = common::client();

    let res = client.head(server.url("/canvas/new")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.stop().await;
}

#[tokio::test]
async fn test_configured_route_without_action_is_500() {
    let mut config = RouterConfig::default();
    config.routes.push(canvas_router::config::RouteConfig {
        method: "GET".into(),
        path: "/drafts".into(),
        to: "drafts#index".into(),
        name: None,
    });

    let server = common::start_server(config).await;
    let res = common::client().get(server.url("/drafts")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    server.stop().await;
}
