pub mod app;
pub mod config;
pub mod entity;
pub mod errors;
pub mod filter;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod routes;
pub mod sort;
pub mod store;
pub mod validation;

pub use errors::ApiError;
pub use models::TodoItem;
pub use pagination::PaginatedList;
pub use store::TodoStore;
