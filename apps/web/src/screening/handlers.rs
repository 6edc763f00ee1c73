//! Axum route handlers for viewing, exporting and discarding result sets.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::screening::ResultSet;
use crate::screening::{filter, to_csv, CSV_FILE_NAME, UTF8_BOM};
use crate::state::AppState;
use crate::upload::handlers::ScreeningResponse;
use crate::views::{ResultsPage, ResultsQuery};

const UPLOAD_PATH: &str = "/upload";

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

async fn find_set(state: &AppState, id: &str) -> Option<Arc<ResultSet>> {
    let id = Uuid::parse_str(id).ok()?;
    state.store.get(id).await
}

/// GET /results
///
/// There is nothing to show without a submission.
pub async fn handle_results_without_set() -> Redirect {
    Redirect::to(UPLOAD_PATH)
}

/// GET /results/:id
///
/// Unknown or expired sets send the user back to the upload form. A query
/// string that does not parse falls back to the default view.
pub async fn handle_results_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Option<Query<ResultsQuery>>,
) -> Result<Response, AppError> {
    let Some(set) = find_set(&state, &id).await else {
        tracing::debug!("Result set {id} not found, redirecting to upload");
        return Ok(Redirect::to(UPLOAD_PATH).into_response());
    };
    let params = params.map(|Query(params)| params).unwrap_or_else(|| {
        tracing::debug!("Ignoring unparseable results query for set {id}");
        ResultsQuery::default()
    });

    let page = ResultsPage::build(&set, &params, state.theme.mode())?;
    Ok(Html(page.render()?).into_response())
}

/// GET /results/:id/export.csv
///
/// Exports the whole set, or only the rows matching `q` when given.
pub async fn handle_export_csv(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(search): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let set = find_set(&state, &id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Result set {id} not found")))?;

    let csv = to_csv(filter(&set.results, &search.q))?;
    let body = format!("{UTF8_BOM}{csv}");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILE_NAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

/// POST /results/:id/clear
///
/// Leaving the results view discards its set.
pub async fn handle_clear_results(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Redirect {
    if let Ok(id) = Uuid::parse_str(&id) {
        if state.store.remove(id).await {
            tracing::debug!("Cleared result set {id}");
        }
    }
    Redirect::to(UPLOAD_PATH)
}

/// GET /api/v1/screenings/:id
pub async fn handle_get_screening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(search): Query<SearchQuery>,
) -> Result<Json<ScreeningResponse>, AppError> {
    let set = state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Result set {id} not found")))?;

    let results = filter(&set.results, &search.q).into_iter().cloned().collect();
    Ok(Json(ScreeningResponse::new(&set, results)))
}

/// DELETE /api/v1/screenings/:id
pub async fn handle_delete_screening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.store.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Result set {id} not found")))
    }
}
