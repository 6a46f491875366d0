//! Persistence for todo items.
//!
//! [`TodoStore`] is the only component that talks to the database. It is built
//! from a connection and handed to the router explicitly; reads never stage a
//! write, and updates are explicit load/modify/persist cycles.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet, QueryFilter,
    Select, Set, TransactionTrait,
};

use crate::entity::{ActiveModel, Entity};
use crate::errors::ApiError;
use crate::filter::search_condition;
use crate::models::{TodoItem, TodoItemCreate, TodoItemUpdate};
use crate::pagination::{PageRequest, PaginatedList, paginate};
use crate::sort::TodoSort;
use crate::validation::Validatable;

const RESOURCE_NAME: &str = "Todo item";

#[derive(Clone, Debug)]
pub struct TodoStore {
    db: DatabaseConnection,
}

impl TodoStore {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pending query over all items: filtered by title, then ordered. Nothing is
    /// fetched until the returned select is executed.
    #[must_use]
    pub fn list(&self, search_term: Option<&str>, sort: TodoSort) -> Select<Entity> {
        sort.apply(Entity::find().filter(search_condition(search_term)))
    }

    /// Runs [`Self::list`] and returns one page of it.
    ///
    /// # Errors
    /// Returns a database error if either the count or the fetch fails.
    pub async fn list_page(
        &self,
        search_term: Option<&str>,
        sort: TodoSort,
        request: PageRequest,
    ) -> Result<PaginatedList<TodoItem>, ApiError> {
        let page = paginate(&self.db, self.list(search_term, sort), request).await?;

        tracing::debug!(
            page = page.page_index,
            total_pages = page.total_pages,
            returned = page.items.len(),
            "Listed todo items"
        );

        Ok(page.map(TodoItem::from))
    }

    /// # Errors
    /// `NotFound` when no item has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<TodoItem, ApiError> {
        Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(TodoItem::from)
            .ok_or_else(|| ApiError::not_found(RESOURCE_NAME, Some(id.to_string())))
    }

    /// Inserts a new item; the store assigns its id.
    ///
    /// # Errors
    /// `ValidationFailed` for an invalid title, or a database error.
    pub async fn create(&self, item: TodoItemCreate) -> Result<TodoItem, ApiError> {
        item.validate()?;

        let active_model = ActiveModel {
            id: NotSet,
            title: Set(item.title),
            description: Set(item.description),
        };
        let model = active_model.insert(&self.db).await?;

        tracing::debug!(id = model.id, "Created todo item");
        Ok(model.into())
    }

    /// Replaces `title` and `description` of an existing item. The id never changes.
    ///
    /// The existence check and the write share one transaction.
    ///
    /// # Errors
    /// `ValidationFailed` for an invalid title, `NotFound` when no item has this
    /// id, or a database error.
    pub async fn update(&self, id: i64, item: TodoItemUpdate) -> Result<TodoItem, ApiError> {
        item.validate()?;

        let txn = self.db.begin().await?;

        let Some(existing) = Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(ApiError::not_found(RESOURCE_NAME, Some(id.to_string())));
        };

        let mut active_model = existing.into_active_model();
        active_model.title = Set(item.title);
        active_model.description = Set(item.description);
        let updated = active_model.update(&txn).await?;

        txn.commit().await?;

        tracing::debug!(id, "Updated todo item");
        Ok(updated.into())
    }

    /// Removes an item permanently with a single conditional delete.
    ///
    /// # Errors
    /// `NotFound` when no row was removed, or a database error.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = Entity::delete_by_id(id).exec(&self.db).await?;

        match result.rows_affected {
            0 => Err(ApiError::not_found(RESOURCE_NAME, Some(id.to_string()))),
            _ => {
                tracing::debug!(id, "Deleted todo item");
                Ok(())
            }
        }
    }
}
