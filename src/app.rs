use axum::Router;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::migration::Migrator;
use crate::openapi::ApiDoc;
use crate::routes;
use crate::store::TodoStore;

/// Connects to `database_url` and brings the schema up to date.
///
/// # Errors
/// Fails if the connection cannot be opened or a migration fails.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!(backend = ?db.get_database_backend(), "Database ready");
    Ok(db)
}

/// Full application: todo routes, API docs at `/docs` and request tracing.
pub fn build(store: TodoStore) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::router(store))
        .split_for_parts();

    router
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http())
}
