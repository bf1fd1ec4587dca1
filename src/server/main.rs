use dotenvy::dotenv;
use std::env;
use todo_service::adapters::{HttpServer, HttpServerConfig};
use todo_service::core::TodoService;
use todo_service::storage::sqlite::SqliteTodoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todos.db".to_string());
    let store = SqliteTodoStore::connect(&database_url).await?;
    let todo_service = TodoService::new(store);

    let config = HttpServerConfig {
        port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()),
    };
    let http_server = HttpServer::new(todo_service, config).await?;
    http_server.run().await
}
