//! Client for the remote screening service.
//!
//! The service is a black box: it takes a job description plus resume files as
//! `multipart/form-data` and answers with a JSON array of match records. The
//! client only judges the HTTP exchange; a success body is returned untouched
//! for `ingest` to validate. `AppState` holds an `Arc<dyn ScreeningService>`
//! so tests can swap in a stub.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::upload::validation::ResumeFile;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("could not reach the screening service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("screening service returned status {status}: {message}")]
    Status { status: u16, message: String },
}

#[async_trait]
pub trait ScreeningService: Send + Sync {
    async fn screen(
        &self,
        job_description: &str,
        files: &[ResumeFile],
    ) -> Result<Bytes, ScreeningError>;
}

/// Error body the service sends alongside 4xx responses.
#[derive(Debug, Deserialize)]
struct ServiceError {
    error: String,
}

#[derive(Clone)]
pub struct HttpScreeningClient {
    client: Client,
    endpoint: String,
}

impl HttpScreeningClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, ScreeningError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    fn build_form(job_description: &str, files: &[ResumeFile]) -> Result<Form, ScreeningError> {
        let mut form = Form::new().text("job_description", job_description.to_string());
        for file in files {
            let part = Part::bytes(file.bytes.to_vec())
                .file_name(file.file_name.clone())
                .mime_str(file.mime_type())?;
            form = form.part("resumes", part);
        }
        Ok(form)
    }
}

#[async_trait]
impl ScreeningService for HttpScreeningClient {
    /// Sends one request; failures are returned to the caller without retrying.
    async fn screen(
        &self,
        job_description: &str,
        files: &[ResumeFile],
    ) -> Result<Bytes, ScreeningError> {
        let form = Self::build_form(job_description, files)?;

        debug!("POST {} with {} resume(s)", self.endpoint, files.len());
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Screening service returned {}: {}", status, body);
            let message = serde_json::from_str::<ServiceError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(ScreeningError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }
}
