use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect, Select};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A validated page request. Both values are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Clamps `page` and `page_size` to a minimum of 1, using the defaults when absent.
    #[must_use]
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let clamp = |value: Option<i64>, default: u64| {
            value.map_or(default, |v| u64::try_from(v.max(1)).unwrap_or(default))
        };
        Self {
            page: clamp(page, DEFAULT_PAGE),
            page_size: clamp(page_size, DEFAULT_PAGE_SIZE),
        }
    }

    #[must_use]
    pub fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of an ordered collection plus count-derived metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub page_index: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> PaginatedList<T> {
    #[must_use]
    pub fn new(items: Vec<T>, page_index: u64, total_count: u64, page_size: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size.max(1));
        Self {
            items,
            page_index,
            total_pages,
            has_previous: page_index > 1,
            has_next: page_index < total_pages,
        }
    }

    /// Converts each item, keeping the page metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedList<U> {
        PaginatedList {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}

/// Executes `select` as one page: counts the filtered query, then fetches the slice.
///
/// A page past the end yields empty `items`, not an error.
///
/// # Errors
/// Propagates any database error from either query.
pub async fn paginate<C, E>(
    db: &C,
    select: Select<E>,
    request: PageRequest,
) -> Result<PaginatedList<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync + 'static,
{
    let total_count = select.clone().count(db).await?;

    let items = if request.offset() >= total_count {
        Vec::new()
    } else {
        select
            .offset(request.offset())
            .limit(request.page_size())
            .all(db)
            .await?
    };

    Ok(PaginatedList::new(
        items,
        request.page(),
        total_count,
        request.page_size(),
    ))
}
