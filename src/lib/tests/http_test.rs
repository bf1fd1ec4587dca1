use crate::adapters::{AppState, router};
use crate::core::{Todo, TodoService};
use crate::storage::memory::MemoryTodoStore;
use axum::Router;
use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let todo_service = TodoService::new(MemoryTodoStore::new());
    router(AppState {
        todo_service: Arc::new(todo_service),
    })
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let resp = app().oneshot(request("GET", "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(request("GET", "/api/todos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn create_todo_returns_201_with_assigned_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.completed);
}

#[tokio::test]
async fn get_todo_by_id_roundtrip() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/api/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    let resp = app.oneshot(request("GET", "/api/todos/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "Buy milk");
}

#[tokio::test]
async fn get_missing_todo_returns_404_with_empty_body() {
    let resp = app().oneshot(request("GET", "/api/todos/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn put_todo_merges_fields_and_keeps_path_id() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/api/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/todos/1",
            r#"{"id":999,"title":"Buy oat milk","completed":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "Buy oat milk");
    assert!(todo.completed);
}

#[tokio::test]
async fn put_missing_todo_returns_404_and_creates_nothing() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/todos/99",
            r#"{"title":"Ghost","completed":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.oneshot(request("GET", "/api/todos")).await.unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

#[tokio::test]
async fn delete_todo_returns_204_and_removes_the_record() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/api/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(request("DELETE", "/api/todos/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(request("GET", "/api/todos/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_todo_returns_204() {
    let resp = app()
        .oneshot(request("DELETE", "/api/todos/99"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_all_todos_empties_the_collection() {
    let app = app();
    for body in [r#"{"title":"One"}"#, r#"{"title":"Two","completed":true}"#] {
        app.clone()
            .oneshot(json_request("POST", "/api/todos", body))
            .await
            .unwrap();
    }

    let resp = app
        .clone()
        .oneshot(request("DELETE", "/api/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(request("GET", "/api/todos")).await.unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}
