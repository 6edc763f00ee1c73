//! Axum route handlers for submitting resumes.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::screening::{ResultSet, ScreeningResult};
use crate::screening::{summarize, Summary};
use crate::state::AppState;
use crate::upload::form::read_upload_form;
use crate::upload::{submit, SubmissionError};
use crate::views::{UploadErrorKind, UploadPage};

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub id: Uuid,
    pub job_description: String,
    pub created_at: DateTime<Utc>,
    pub summary: Summary,
    pub results: Vec<ScreeningResult>,
}

impl ScreeningResponse {
    pub fn new(set: &ResultSet, results: Vec<ScreeningResult>) -> Self {
        Self {
            id: set.id,
            job_description: set.job_description.clone(),
            created_at: set.created_at,
            summary: summarize(&set.results),
            results,
        }
    }
}

/// GET /upload
pub async fn handle_upload_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = UploadPage::new(state.theme.mode(), state.config.max_resume_bytes);
    Ok(Html(page.render()?))
}

/// POST /upload
///
/// Success redirects to the results view. Any failure re-renders the form with
/// the message and the job description that was entered, so the user can fix
/// it or simply resubmit.
pub async fn handle_upload_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let page = UploadPage::new(state.theme.mode(), state.config.max_resume_bytes);

    let form = match read_upload_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            let page = page.with_error(
                String::new(),
                UploadErrorKind::Validation,
                format!("Could not read the upload: {}", e.body_text()),
            );
            return Ok((StatusCode::BAD_REQUEST, Html(page.render()?)).into_response());
        }
    };

    let job_description = form.job_description.clone();
    match submit(
        state.screening.as_ref(),
        &state.store,
        &state.upload_policy(),
        form,
    )
    .await
    {
        Ok(set) => Ok(Redirect::to(&format!("/results/{}", set.id)).into_response()),
        Err(err) => {
            let (status, kind, message) = match &err {
                SubmissionError::Validation(e) => {
                    (StatusCode::BAD_REQUEST, UploadErrorKind::Validation, e.to_string())
                }
                SubmissionError::Remote(_) => (
                    StatusCode::BAD_GATEWAY,
                    UploadErrorKind::Upstream,
                    "Failed to analyze resumes.".to_string(),
                ),
                SubmissionError::Malformed(e) => (
                    StatusCode::BAD_GATEWAY,
                    UploadErrorKind::Malformed,
                    format!("The screening service sent an unexpected response ({e})."),
                ),
            };
            let page = page.with_error(job_description, kind, message);
            Ok((status, Html(page.render()?)).into_response())
        }
    }
}

/// POST /api/v1/screenings
///
/// JSON counterpart of the upload form.
pub async fn handle_create_screening(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ScreeningResponse>), AppError> {
    let form = read_upload_form(multipart).await?;
    let set = submit(
        state.screening.as_ref(),
        &state.store,
        &state.upload_policy(),
        form,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ScreeningResponse::new(&set, set.results.clone())),
    ))
}
