//! Todo API server
//!
//! ```bash
//! DATABASE_URL=sqlite://todos.db?mode=rwc cargo run
//! ```
//!
//! Then visit:
//! - **API**: <http://localhost:3000/api/todos>
//! - **Documentation**: <http://localhost:3000/docs>

use todo_api::{TodoStore, app, config::Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_api=debug,tower_http=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();
    let db = app::connect(&config.database_url).await?;
    let app = app::build(TodoStore::new(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(address = %config.bind_addr, "API listening, docs served at /docs");
    axum::serve(listener, app).await?;
    Ok(())
}
