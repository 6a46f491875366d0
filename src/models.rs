use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity;
use crate::validation::{Validatable, ValidationErrors, validators::validate_title};

/// A todo item as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoItem {
    /// Store-assigned identity, always positive
    pub id: i64,
    #[schema(min_length = 1, max_length = 50)]
    pub title: String,
    pub description: Option<String>,
}

impl From<entity::Model> for TodoItem {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
        }
    }
}

/// Body of `POST /api/todos`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TodoItemCreate {
    #[serde(default)]
    #[schema(min_length = 1, max_length = 50)]
    pub title: String,
    pub description: Option<String>,
}

impl Validatable for TodoItemCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_title(&self.title));
        errors.result()
    }
}

/// Body of `PUT /api/todos/{id}`. Replaces `title` and `description` wholesale.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TodoItemUpdate {
    /// Must equal the id in the path; a missing id reads as 0
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    #[schema(min_length = 1, max_length = 50)]
    pub title: String,
    pub description: Option<String>,
}

impl Validatable for TodoItemUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_title(&self.title));
        errors.result()
    }
}

/// Query string of `GET /api/todos`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListQuery {
    /// Case-insensitive substring matched against the title
    #[param(example = "milk")]
    pub search_term: Option<String>,
    /// `title_asc` or `title_desc`; anything else keeps id order
    #[param(example = "title_asc")]
    pub sort: Option<String>,
    /// 1-based page number, values below 1 are treated as 1
    #[param(example = 1)]
    pub page: Option<i64>,
    /// Items per page, values below 1 are treated as 1
    #[param(example = 10)]
    pub page_size: Option<i64>,
}
