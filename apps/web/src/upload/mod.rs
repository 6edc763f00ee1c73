//! Upload submission — validate the form, call the screening service, ingest
//! the answer and hand the resulting ResultSet to the store.

pub mod client;
pub mod form;
pub mod handlers;
pub mod ingest;
pub mod validation;

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::screening::ResultSet;
use crate::store::ResultStore;
use crate::upload::client::{ScreeningError, ScreeningService};
use crate::upload::ingest::{ingest, MalformedResponse};
use crate::upload::validation::{validate, UploadForm, UploadPolicy, ValidationError};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] ScreeningError),

    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

/// Runs one submission end to end. Validation failures never reach the
/// network; nothing is stored unless every record passes ingestion.
pub async fn submit(
    service: &dyn ScreeningService,
    store: &ResultStore,
    policy: &UploadPolicy,
    form: UploadForm,
) -> Result<Arc<ResultSet>, SubmissionError> {
    validate(&form, policy)?;

    info!(
        "Submitting {} resume(s) against a {}-character job description",
        form.files.len(),
        form.job_description.len()
    );

    let body = service
        .screen(&form.job_description, &form.files)
        .await
        .inspect_err(|e| warn!("Screening request failed: {e}"))?;

    let results = ingest(&body).inspect_err(|e| warn!("Rejected screening response: {e}"))?;

    let set = store
        .insert(ResultSet::new(form.job_description, results))
        .await;
    info!("Stored result set {} with {} result(s)", set.id, set.results.len());
    Ok(set)
}
