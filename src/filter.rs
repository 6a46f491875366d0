use sea_orm::{
    Condition,
    sea_query::{Expr, Func, LikeExpr},
};

use crate::entity::Column;

const LIKE_ESCAPE: char = '!';

/// Escape LIKE wildcards so the term is matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the title search condition.
///
/// A missing or blank term yields an empty condition (matches everything).
/// Otherwise the term is matched as a substring of `title`, either verbatim or
/// case-insensitively. The verbatim branch keeps exact matches working on
/// backends whose `LOWER` only folds ASCII.
#[must_use]
pub fn search_condition(search_term: Option<&str>) -> Condition {
    let mut condition = Condition::all();

    if let Some(term) = search_term.filter(|t| !t.trim().is_empty()) {
        let exact = format!("%{}%", escape_like(term));
        let lowered = format!("%{}%", escape_like(&term.to_lowercase()));
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Title).like(LikeExpr::new(exact).escape(LIKE_ESCAPE)))
                .add(
                    Expr::expr(Func::lower(Expr::col(Column::Title)))
                        .like(LikeExpr::new(lowered).escape(LIKE_ESCAPE)),
                ),
        );
    }

    condition
}
