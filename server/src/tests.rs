use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use facts::FactsResponse;

use crate::handlers;
use crate::services::facts::{ListFacts, SuggestTerms, mem::FactsStore};

const DATA: &str = r#"[
    {"user": {"name": {"first": "Ivan", "last": "Petrov"}}, "text": "Cats sleep sixteen hours a day", "upvotes": 4},
    {"text": "Dogs bark at strangers", "upvotes": 2},
    {"user": {"name": {"first": "Mary", "last": "Lane"}}, "text": "Cats purr when content", "upvotes": 9}
]"#;

fn store() -> FactsStore {
    FactsStore::from_json(DATA).unwrap()
}

#[tokio::test]
async fn list_slices_pages_and_reports_totals() {
    let page = store().list(1, 2, None).await.unwrap();
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.pagination.total_count, 3);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.pagination.current_page, 1);

    let page = store().list(2, 2, None).await.unwrap();
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].text, "Cats purr when content");
}

#[tokio::test]
async fn list_past_the_end_is_empty() {
    let page = store().list(5, 2, None).await.unwrap();
    assert!(page.records.is_empty());
    assert_eq!(page.pagination.current_page, 5);
    assert_eq!(page.pagination.total_pages, 2);
}

#[tokio::test]
async fn list_floors_page_to_one() {
    let page = store().list(0, 2, None).await.unwrap();
    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.records.len(), 2);
}

#[tokio::test]
async fn list_filters_by_query_case_insensitively() {
    let page = store().list(1, 10, Some("CATS")).await.unwrap();
    assert_eq!(page.pagination.total_count, 2);
    assert!(
        page.records
            .iter()
            .all(|record| record.text.starts_with("Cats"))
    );
}

#[tokio::test]
async fn suggestions_are_sorted_prefix_matches() {
    let terms = store().suggest("s").await.unwrap();
    assert_eq!(terms, vec!["sixteen", "sleep", "strangers"]);
}

#[tokio::test]
async fn empty_suggestion_query_yields_nothing() {
    assert!(store().suggest("").await.unwrap().is_empty());
    assert!(store().suggest("   ").await.unwrap().is_empty());
}

#[tokio::test]
async fn suggestions_are_capped_at_ten() {
    let store = FactsStore::from_json(
        r#"[{"text": "cat cab cad cage cake calf call calm came camp can cane cap cape car card", "upvotes": 1}]"#,
    )
    .unwrap();
    assert_eq!(store.suggest("ca").await.unwrap().len(), 10);
}

#[tokio::test]
async fn embedded_dataset_parses_and_paginates() {
    let store = FactsStore::embedded().unwrap();
    let page = store.list(1, 10, None).await.unwrap();
    assert_eq!(page.records.len(), 10);
    assert!(page.pagination.total_pages >= 2);
}

#[tokio::test]
async fn list_handler_returns_the_wire_shape() {
    let response = handlers::facts::list(
        State(store()),
        Query(handlers::facts::ListQuery {
            page: None,
            per_page: None,
            q: None,
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(std::str::from_utf8(&body).unwrap().contains("\"_pagination\""));

    let decoded: FactsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(decoded.records.len(), 3);
    assert_eq!(decoded.pagination.per_page, 10);
}

#[tokio::test]
async fn list_handler_rejects_zero_per_page() {
    let response = handlers::facts::list(
        State(store()),
        Query(handlers::facts::ListQuery {
            page: None,
            per_page: Some(0),
            q: None,
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn autocomplete_handler_returns_terms() {
    let response = handlers::facts::autocomplete(
        State(store()),
        Query(handlers::facts::SuggestQuery {
            q: "sl".to_owned(),
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let terms: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(terms, vec!["sleep"]);
}
