use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::errors::ApiError;
use crate::models::{ListQuery, TodoItem, TodoItemCreate, TodoItemUpdate};
use crate::pagination::{PageRequest, PaginatedList};
use crate::sort::TodoSort;
use crate::store::TodoStore;

pub const TODOS_PATH: &str = "/api/todos";

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// Lists todo items: filter by title, then sort, then paginate.
#[utoipa::path(
    get,
    path = "/api/todos",
    params(ListQuery),
    responses(
        (status = OK, description = "One page of todo items", body = PaginatedList<TodoItem>),
        (status = INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    tag = "todos"
)]
pub async fn list_todos(
    State(store): State<TodoStore>,
    Query(params): Query<ListQuery>,
) -> Result<Json<PaginatedList<TodoItem>>, ApiError> {
    let request = PageRequest::new(params.page, params.page_size);
    let sort = TodoSort::parse(params.sort.as_deref());

    let page = store
        .list_page(params.search_term.as_deref(), sort, request)
        .await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    params(("id" = i64, Path, description = "Todo item id")),
    responses(
        (status = OK, description = "The requested todo item", body = TodoItem),
        (status = NOT_FOUND, description = "Todo item not found")
    ),
    tag = "todos"
)]
pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
    store.get_by_id(id).await.map(Json)
}

/// Creates a todo item and points `Location` at its single-item route.
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = TodoItemCreate,
    responses(
        (status = CREATED, description = "Todo item created", body = TodoItem,
            headers(("Location" = String, description = "Path of the created item"))),
        (status = BAD_REQUEST, description = "Invalid title or malformed body")
    ),
    tag = "todos"
)]
pub async fn create_todo(
    State(store): State<TodoStore>,
    payload: Result<Json<TodoItemCreate>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TodoItem>), ApiError> {
    let item = store.create(parse_body(payload)?).await?;
    let location = format!("{TODOS_PATH}/{}", item.id);

    tracing::info!(id = item.id, "Todo item created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    params(("id" = i64, Path, description = "Todo item id")),
    request_body = TodoItemUpdate,
    responses(
        (status = NO_CONTENT, description = "Todo item updated"),
        (status = BAD_REQUEST, description = "Body id does not match path id, or invalid title"),
        (status = NOT_FOUND, description = "Todo item not found")
    ),
    tag = "todos"
)]
pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
    payload: Result<Json<TodoItemUpdate>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let item = parse_body(payload)?;
    if item.id != id {
        return Err(ApiError::bad_request(format!(
            "Body id {} does not match path id {id}",
            item.id
        )));
    }

    store.update(id, item).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(("id" = i64, Path, description = "Todo item id")),
    responses(
        (status = NO_CONTENT, description = "Todo item deleted"),
        (status = NOT_FOUND, description = "Todo item not found")
    ),
    tag = "todos"
)]
pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Todo routes with the store injected as router state.
pub fn router(store: TodoStore) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_todos, create_todo))
        .routes(routes!(get_todo, update_todo, delete_todo))
        .with_state(store)
}
