//! End-to-end tests driving the application over a real TCP listener.

use nudge_web::config::Config;
use nudge_web::web::{create_router, endpoints, AppState};

fn test_config() -> Config {
    Config {
        app_title: "Nudge AI".to_string(),
        app_description: "Nudge AI Brain".to_string(),
        static_dir: "static".to_string(),
        port: 0,
        rust_log: "info".to_string(),
        verbose: false,
    }
}

/// Serve the app on an ephemeral port and return its base URL.
async fn spawn_app(ready: bool) -> String {
    let state = AppState::from_config(&test_config());
    state.set_ready(ready);
    let router = create_router(state, endpoints::router());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn landing_page_round_trip() {
    let base = spawn_app(true).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(response.status(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    assert!(html.contains("Nudge AI"));
    assert!(html.contains("Nudge AI Brain"));
}

#[tokio::test]
async fn favicon_redirect_points_at_existing_asset() {
    let base = spawn_app(true).await;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let response = client
        .get(format!("{base}/favicon.ico"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 307);

    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert_eq!(location, "/static/favicon.ico");

    // The redirect target must actually be served
    let asset = client
        .get(format!("{base}{location}"))
        .send()
        .await
        .unwrap();
    assert_eq!(asset.status(), 200);
    assert!(!asset.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn status_reports_service_metadata() {
    let base = spawn_app(true).await;

    let response = reqwest::get(format!("{base}/api/v1/status")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["service"], "Nudge AI");
    assert_eq!(body["status"], "running");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let base = spawn_app(true).await;

    let response = reqwest::get(format!("{base}/no-such-page")).await.unwrap();
    assert_eq!(response.status(), 404);
}
