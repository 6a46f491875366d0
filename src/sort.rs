use sea_orm::{EntityTrait, QueryOrder, Select, sea_query::Order};

use crate::entity::Column;

/// Ordering requested through the `sort` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TodoSort {
    /// Insertion order (`id` ascending)
    #[default]
    Id,
    TitleAsc,
    TitleDesc,
}

impl TodoSort {
    /// Unrecognised values fall back to the default ordering.
    #[must_use]
    pub fn parse(sort: Option<&str>) -> Self {
        match sort.map(str::trim) {
            Some("title_asc") => Self::TitleAsc,
            Some("title_desc") => Self::TitleDesc,
            _ => Self::Id,
        }
    }

    /// Orders `select`, breaking title ties by id so pages stay stable.
    /// `TitleDesc` is the exact reverse of `TitleAsc`.
    #[must_use]
    pub fn apply<E>(self, select: Select<E>) -> Select<E>
    where
        E: EntityTrait<Column = Column>,
    {
        match self {
            Self::Id => select.order_by(Column::Id, Order::Asc),
            Self::TitleAsc => select
                .order_by(Column::Title, Order::Asc)
                .order_by(Column::Id, Order::Asc),
            Self::TitleDesc => select
                .order_by(Column::Title, Order::Desc)
                .order_by(Column::Id, Order::Desc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_parse_known_values() {
        assert_eq!(TodoSort::parse(Some("title_asc")), TodoSort::TitleAsc);
        assert_eq!(TodoSort::parse(Some("title_desc")), TodoSort::TitleDesc);
    }

    #[test]
    fn test_parse_falls_back_to_id() {
        assert_eq!(TodoSort::parse(None), TodoSort::Id);
        assert_eq!(TodoSort::parse(Some("")), TodoSort::Id);
        assert_eq!(TodoSort::parse(Some("TITLE_ASC")), TodoSort::Id);
        assert_eq!(TodoSort::parse(Some("description_asc")), TodoSort::Id);
    }

    #[test]
    fn test_apply_orders_with_id_tiebreak() {
        let sql = TodoSort::TitleAsc
            .apply(Entity::find())
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(
            sql.ends_with(r#"ORDER BY "todo_items"."title" ASC, "todo_items"."id" ASC"#),
            "{sql}"
        );

        let sql = TodoSort::TitleDesc
            .apply(Entity::find())
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(
            sql.ends_with(r#"ORDER BY "todo_items"."title" DESC, "todo_items"."id" DESC"#),
            "{sql}"
        );
    }
}
