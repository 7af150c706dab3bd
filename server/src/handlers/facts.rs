use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use facts::FactsResponse;

use crate::services::facts::{ListFacts, SuggestTerms};

pub(crate) async fn list<Service>(
    State(service): State<Service>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse
where
    Service: ListFacts,
{
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(10);
    if !(1..=100).contains(&per_page) {
        return crate::responses::Error::unprocessable("per-page must be between 1 and 100")
            .into_response();
    }

    let q = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());
    tracing::debug!(page, per_page, q, "listing facts");

    match service.list(page, per_page, q).await {
        Err(e) => {
            tracing::error!("failed to list facts: {}", e);
            crate::responses::Error::internal(e).into_response()
        }
        Ok(listed) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            Json(FactsResponse {
                records: listed.records,
                pagination: listed.pagination,
            }),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub(crate) struct ListQuery {
    pub(crate) page: Option<u32>,
    #[serde(rename = "per-page")]
    pub(crate) per_page: Option<u32>,
    pub(crate) q: Option<String>,
}

pub(crate) async fn autocomplete<Service>(
    State(service): State<Service>,
    Query(query): Query<SuggestQuery>,
) -> impl IntoResponse
where
    Service: SuggestTerms,
{
    match service.suggest(query.q.trim()).await {
        Err(e) => {
            tracing::error!("failed to build suggestions: {}", e);
            crate::responses::Error::internal(e).into_response()
        }
        Ok(terms) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            Json(terms),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub(crate) struct SuggestQuery {
    #[serde(default)]
    pub(crate) q: String,
}
