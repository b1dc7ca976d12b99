//! HTTP request handlers

use super::state::AppState;
use super::view::PageState;
use crate::error::SearchError;
use crate::export::{content_disposition, to_csv, ExportRequest};
use crate::search::{parse_bound, CreatorQuery, CreatorRecord};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Query parameters shared by the search page and the JSON API.
///
/// Bounds stay strings so a non-numeric value falls back to its default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub min_followers: Option<String>,
    pub max_followers: Option<String>,
    /// Accepted for forward compatibility; not applied
    pub uploaded_after: Option<String>,
}

impl SearchParams {
    fn to_query(&self, state: &AppState) -> CreatorQuery {
        let range = state.search.follower_range(
            parse_bound(self.min_followers.as_deref()),
            parse_bound(self.max_followers.as_deref()),
        );
        CreatorQuery::new(self.keyword.as_deref().unwrap_or_default(), range)
    }
}

/// JSON search response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub creators: Vec<CreatorRecord>,
}

/// Form body posted by the export button
#[derive(Debug, Deserialize)]
pub struct ExportForm {
    pub payload: String,
}

/// Search page: renders the form and, once submitted, the results
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let mut page = PageState {
        instance_name: state.instance_name().to_string(),
        keyword: params.keyword.clone().unwrap_or_default(),
        min_followers: params.min_followers.clone().unwrap_or_default(),
        max_followers: params.max_followers.clone().unwrap_or_default(),
        uploaded_after: params.uploaded_after.clone().unwrap_or_default(),
        searched: params.keyword.is_some(),
        ..Default::default()
    };

    if page.searched {
        if page.keyword.trim().is_empty() {
            page.set_error("Please enter a keyword or niche");
        } else {
            let query = params.to_query(&state);
            match state.search.execute(&query).await {
                Ok(records) => page.set_results(query.trimmed_keyword(), records),
                Err(e) => {
                    warn!("Search '{}' failed: {:?}", query.trimmed_keyword(), e);
                    page.set_error(e.to_string());
                }
            }
        }
    }

    match state.templates.render("index.html", &page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// JSON search API
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, SearchError> {
    if params.keyword.is_none() {
        return Err(SearchError::InvalidInput("Keyword is required".to_string()));
    }

    if let Some(ref date) = params.uploaded_after {
        debug!("Ignoring uploadedAfter={}", date);
    }

    let creators = state.search.execute(&params.to_query(&state)).await?;
    Ok(Json(SearchResponse { creators }))
}

/// CSV export from the search page's hidden form
pub async fn export_form(Form(form): Form<ExportForm>) -> Result<Response, SearchError> {
    let request: ExportRequest = serde_json::from_str(&form.payload)
        .map_err(|e| SearchError::InvalidInput(format!("Invalid export payload: {}", e)))?;

    Ok(csv_response(request))
}

/// CSV export from a JSON body
pub async fn api_export(
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, SearchError> {
    let Json(request) = body.map_err(|e| {
        SearchError::InvalidInput(format!("Invalid export payload: {}", e.body_text()))
    })?;

    Ok(csv_response(request))
}

/// CSV attachment, or 204 when there is nothing to export
fn csv_response(request: ExportRequest) -> Response {
    if request.creators.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let disposition = content_disposition(&request.keyword, Utc::now());
    let body = to_csv(&request.creators);

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Robots.txt handler
pub async fn robots_txt() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        "User-agent: *\nDisallow: /\n",
    )
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
