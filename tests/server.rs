//! End-to-end test over a real TCP listener

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use users_api::{handlers, services::InMemoryUserService, AppState, Config};

/// Serve the app on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let state = AppState::with_service(Arc::new(InMemoryUserService::new()), Config::in_memory());
    let app = handlers::app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn user_lifecycle_over_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/users", base))
        .json(&json!({"loginName": "alice"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get("location").unwrap().to_str().unwrap(),
        "/api/users/1"
    );
    let created: Value = response.json().await.unwrap();
    assert_eq!(created, json!({"id": 1, "loginName": "alice"}));

    let fetched: Value = client
        .get(format!("{}/api/users/1", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let response = client
        .delete(format!("{}/api/users/1", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/api/users/1", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
