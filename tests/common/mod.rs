#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use todo_api::{TodoItem, TodoStore, app};
use tower::ServiceExt;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    app::connect("sqlite::memory:").await
}

pub fn setup_test_app(db: DatabaseConnection) -> Router {
    app::build(TodoStore::new(db))
}

pub async fn setup() -> Router {
    let db = setup_test_db()
        .await
        .expect("Failed to setup test database");
    setup_test_app(db)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn create_todo(app: &Router, title: &str, description: Option<&str>) -> TodoItem {
    let response = send(
        app,
        "POST",
        "/api/todos",
        Some(serde_json::json!({ "title": title, "description": description })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    serde_json::from_value(body_json(response).await).unwrap()
}

pub fn titles(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}
