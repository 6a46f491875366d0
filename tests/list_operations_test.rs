// List Operations Test
// Search, sort and pagination of GET /api/todos, and how they compose.

use axum::http::StatusCode;

mod common;
use common::{body_json, create_todo, send, setup, titles};

async fn list(app: &axum::Router, query: &str) -> serde_json::Value {
    let response = send(app, "GET", &format!("/api/todos{query}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = setup().await;

    let page = list(&app, "").await;
    assert_eq!(
        page,
        serde_json::json!({
            "items": [],
            "pageIndex": 1,
            "totalPages": 0,
            "hasPrevious": false,
            "hasNext": false
        })
    );
}

#[tokio::test]
async fn test_list_default_paging_returns_all_items() {
    let app = setup().await;
    create_todo(&app, "Buy milk", Some("Just desc")).await;
    create_todo(&app, "Clean house", Some("Just desc")).await;

    let page = list(&app, "?page=1&pageSize=10").await;
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["pageIndex"], 1);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["hasPrevious"], false);
    assert_eq!(page["hasNext"], false);

    // Same result without any query parameters
    assert_eq!(list(&app, "").await, page);
}

#[tokio::test]
async fn test_list_default_order_is_insertion_order() {
    let app = setup().await;
    for title in ["Charlie", "Alpha", "Bravo"] {
        create_todo(&app, title, None).await;
    }

    let page = list(&app, "").await;
    assert_eq!(titles(&page), vec!["Charlie", "Alpha", "Bravo"]);

    // Unknown sort values keep the default order
    let page = list(&app, "?sort=priority_desc").await;
    assert_eq!(titles(&page), vec!["Charlie", "Alpha", "Bravo"]);
}

#[tokio::test]
async fn test_list_sorting_by_title() {
    let app = setup().await;
    for title in ["Charlie", "Alpha", "Bravo"] {
        create_todo(&app, title, None).await;
    }

    let ascending = titles(&list(&app, "?sort=title_asc").await);
    assert_eq!(ascending, vec!["Alpha", "Bravo", "Charlie"]);

    let mut descending = titles(&list(&app, "?sort=title_desc").await);
    assert_eq!(descending, vec!["Charlie", "Bravo", "Alpha"]);

    descending.reverse();
    assert_eq!(descending, ascending);
}

#[tokio::test]
async fn test_list_search_returns_matching_subset() {
    let app = setup().await;
    create_todo(&app, "Buy milk", None).await;
    create_todo(&app, "Clean house", None).await;
    create_todo(&app, "Walk the dog", None).await;

    let page = list(&app, "?searchTerm=milk").await;
    assert_eq!(titles(&page), vec!["Buy milk"]);
    assert_eq!(page["totalPages"], 1);

    let page = list(&app, "?searchTerm=nothing-matches").await;
    assert!(titles(&page).is_empty());
    assert_eq!(page["totalPages"], 0);
}

#[tokio::test]
async fn test_list_search_is_case_insensitive() {
    let app = setup().await;
    create_todo(&app, "Buy Milk", None).await;
    create_todo(&app, "Clean house", None).await;

    assert_eq!(titles(&list(&app, "?searchTerm=MILK").await), vec!["Buy Milk"]);
    assert_eq!(titles(&list(&app, "?searchTerm=mIlK").await), vec!["Buy Milk"]);
}

#[tokio::test]
async fn test_list_search_matches_non_ascii_titles() {
    let app = setup().await;
    create_todo(&app, "École supplies", None).await;
    create_todo(&app, "Clean house", None).await;

    // "École", percent-encoded
    assert_eq!(
        titles(&list(&app, "?searchTerm=%C3%89cole").await),
        vec!["École supplies"]
    );
}

#[tokio::test]
async fn test_list_sorts_with_duplicate_titles_are_exact_reverses() {
    let app = setup().await;
    let first = create_todo(&app, "Same", Some("first")).await;
    let second = create_todo(&app, "Same", Some("second")).await;
    let alpha = create_todo(&app, "Alpha", None).await;

    let ids = |page: &serde_json::Value| -> Vec<i64> {
        page["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_i64().unwrap())
            .collect()
    };

    let ascending = ids(&list(&app, "?sort=title_asc").await);
    assert_eq!(ascending, vec![alpha.id, first.id, second.id]);

    let mut descending = ids(&list(&app, "?sort=title_desc").await);
    descending.reverse();
    assert_eq!(descending, ascending);
}

#[tokio::test]
async fn test_list_search_matches_wildcards_literally() {
    let app = setup().await;
    create_todo(&app, "Save 100% effort", None).await;
    create_todo(&app, "Save 1000 coins", None).await;
    create_todo(&app, "snake_case rename", None).await;
    create_todo(&app, "snakeXcase rename", None).await;

    assert_eq!(
        titles(&list(&app, "?searchTerm=100%25").await),
        vec!["Save 100% effort"]
    );
    assert_eq!(
        titles(&list(&app, "?searchTerm=snake_case").await),
        vec!["snake_case rename"]
    );
}

#[tokio::test]
async fn test_list_blank_search_term_matches_everything() {
    let app = setup().await;
    create_todo(&app, "Buy milk", None).await;
    create_todo(&app, "Clean house", None).await;

    assert_eq!(titles(&list(&app, "?searchTerm=").await).len(), 2);
}

#[tokio::test]
async fn test_list_pagination_metadata() {
    let app = setup().await;
    for title in ["One", "Two", "Three", "Four", "Five"] {
        create_todo(&app, title, None).await;
    }

    let first = list(&app, "?page=1&pageSize=2").await;
    assert_eq!(titles(&first), vec!["One", "Two"]);
    assert_eq!(first["totalPages"], 3);
    assert_eq!(first["hasPrevious"], false);
    assert_eq!(first["hasNext"], true);

    let middle = list(&app, "?page=2&pageSize=2").await;
    assert_eq!(titles(&middle), vec!["Three", "Four"]);
    assert_eq!(middle["hasPrevious"], true);
    assert_eq!(middle["hasNext"], true);

    let last = list(&app, "?page=3&pageSize=2").await;
    assert_eq!(titles(&last), vec!["Five"]);
    assert_eq!(last["pageIndex"], 3);
    assert_eq!(last["hasNext"], false);
}

#[tokio::test]
async fn test_list_page_past_the_end_is_empty() {
    let app = setup().await;
    create_todo(&app, "Only one", None).await;

    let page = list(&app, "?page=9&pageSize=10").await;
    assert!(titles(&page).is_empty());
    assert_eq!(page["pageIndex"], 9);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["hasPrevious"], true);
    assert_eq!(page["hasNext"], false);
}

#[tokio::test]
async fn test_list_clamps_non_positive_paging() {
    let app = setup().await;
    create_todo(&app, "Buy milk", None).await;
    create_todo(&app, "Clean house", None).await;

    let page = list(&app, "?page=0&pageSize=0").await;
    assert_eq!(page["pageIndex"], 1);
    assert_eq!(titles(&page), vec!["Buy milk"]);
    assert_eq!(page["totalPages"], 2);

    let page = list(&app, "?page=-3&pageSize=-10").await;
    assert_eq!(page["pageIndex"], 1);
    assert_eq!(titles(&page).len(), 1);
}

#[tokio::test]
async fn test_list_filter_then_sort_then_paginate() {
    let app = setup().await;
    for title in ["Buy milk", "Buy bread", "Clean house", "Buy apples", "Buy coffee"] {
        create_todo(&app, title, None).await;
    }

    let page = list(&app, "?searchTerm=buy&sort=title_desc&page=1&pageSize=3").await;
    assert_eq!(titles(&page), vec!["Buy milk", "Buy coffee", "Buy bread"]);
    assert_eq!(page["totalPages"], 2);

    let page = list(&app, "?searchTerm=buy&sort=title_desc&page=2&pageSize=3").await;
    assert_eq!(titles(&page), vec!["Buy apples"]);
    assert_eq!(page["hasNext"], false);
}

#[tokio::test]
async fn test_list_rejects_non_numeric_paging() {
    let app = setup().await;

    let response = send(&app, "GET", "/api/todos?page=abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
