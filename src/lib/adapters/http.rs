use crate::core::{ServiceError, Todo, TodoService};
use crate::storage::TodoStore;
use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::{net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub port: String,
}

pub struct AppState<S: TodoStore> {
    pub todo_service: Arc<TodoService<S>>,
}

impl<S: TodoStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            todo_service: self.todo_service.clone(),
        }
    }
}

/// Transport-level outcome mapping: absence becomes 404 with an empty body,
/// a store failure becomes 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("todo with id {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::Service(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

#[derive(Deserialize)]
pub struct TodoPathParams {
    pub id: i64,
}

pub async fn get_todos<S: TodoStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let items = state.todo_service.get_all_todos().await?;
    Ok(Json(items))
}

pub async fn post_todos<S: TodoStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<Todo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let item = state.todo_service.add_todo(body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn delete_todos<S: TodoStore>(
    State(state): State<AppState<S>>,
) -> Result<StatusCode, ApiError> {
    state.todo_service.delete_all_todos().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_todos_by_id<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(params): Path<TodoPathParams>,
) -> Result<Json<Todo>, ApiError> {
    let item = state
        .todo_service
        .get_todo_by_id(params.id)
        .await?
        .ok_or(ApiError::NotFound(params.id))?;
    Ok(Json(item))
}

pub async fn put_todos_by_id<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(params): Path<TodoPathParams>,
    Json(body): Json<Todo>,
) -> Result<Json<Todo>, ApiError> {
    let item = state
        .todo_service
        .update_todo(params.id, body)
        .await?
        .ok_or(ApiError::NotFound(params.id))?;
    Ok(Json(item))
}

pub async fn delete_todos_by_id<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(params): Path<TodoPathParams>,
) -> Result<StatusCode, ApiError> {
    state.todo_service.delete_todo(params.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn health_route() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

fn api_routes<S: TodoStore>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/todos",
            get(get_todos::<S>)
                .post(post_todos::<S>)
                .delete(delete_todos::<S>),
        )
        .route(
            "/todos/{id}",
            get(get_todos_by_id::<S>)
                .put(put_todos_by_id::<S>)
                .delete(delete_todos_by_id::<S>),
        )
}

pub fn router<S: TodoStore>(state: AppState<S>) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    Router::new()
        .route("/health", get(health_route))
        .nest("/api", api_routes())
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new<S: TodoStore>(
        todo_service: TodoService<S>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        let state = AppState {
            todo_service: Arc::new(todo_service),
        };
        let router = router(state);

        let addr = SocketAddr::from((
            [0, 0, 0, 0, 0, 0, 0, 0],
            config.port.parse::<u16>().unwrap_or(3000),
        ));
        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.listener.local_addr()?);
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}
