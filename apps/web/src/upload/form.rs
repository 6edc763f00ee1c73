use axum::extract::multipart::{Multipart, MultipartError};
use tracing::debug;

use crate::upload::validation::{ResumeFile, UploadForm};

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUMES_FIELD: &str = "resumes";

/// Collects the upload form from a multipart body. Unknown fields are skipped,
/// as is the empty file part browsers send when nothing was selected.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, MultipartError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_FIELD => {
                form.job_description = field.text().await?;
            }
            RESUMES_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.files.push(ResumeFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            other => debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    Ok(form)
}
