use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        description = "Create, read, update and delete todo items"
    ),
    tags((name = "todos", description = "Todo item management"))
)]
pub struct ApiDoc;
