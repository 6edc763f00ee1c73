//! Local checks run before anything is sent to the screening service.

use bytes::Bytes;
use thiserror::Error;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Browsers fall back to this when they cannot guess a type.
const GENERIC_MIME: &str = "application/octet-stream";

/// A resume attachment as received from the browser.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// MIME type sent upstream, derived from the extension.
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => MIME_PDF,
            Some("doc") => MIME_DOC,
            Some("docx") => MIME_DOCX,
            _ => GENERIC_MIME,
        }
    }
}

/// Everything the upload form collects.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub job_description: String,
    pub files: Vec<ResumeFile>,
}

#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    pub max_file_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a job description")]
    EmptyJobDescription,

    #[error("Please upload at least one resume")]
    NoFiles,

    #[error("{file_name}: only PDF, DOC and DOCX files are accepted")]
    UnsupportedType { file_name: String },

    #[error("{file_name} is empty")]
    EmptyFile { file_name: String },

    #[error("{file_name} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge {
        file_name: String,
        size: usize,
        limit: usize,
    },
}

/// Checks the form in order: job description, file count, then each file.
/// Stops at the first problem.
pub fn validate(form: &UploadForm, policy: &UploadPolicy) -> Result<(), ValidationError> {
    if form.job_description.trim().is_empty() {
        return Err(ValidationError::EmptyJobDescription);
    }
    if form.files.is_empty() {
        return Err(ValidationError::NoFiles);
    }

    for file in &form.files {
        if !is_accepted_type(file) {
            return Err(ValidationError::UnsupportedType {
                file_name: file.file_name.clone(),
            });
        }
        if file.size() == 0 {
            return Err(ValidationError::EmptyFile {
                file_name: file.file_name.clone(),
            });
        }
        if file.size() > policy.max_file_bytes {
            return Err(ValidationError::TooLarge {
                file_name: file.file_name.clone(),
                size: file.size(),
                limit: policy.max_file_bytes,
            });
        }
    }

    Ok(())
}

fn is_accepted_type(file: &ResumeFile) -> bool {
    let extension_ok = file
        .extension()
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));
    if !extension_ok {
        return false;
    }

    let Some(declared) = file.content_type.as_deref() else {
        return true;
    };
    let essence = declared
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence.is_empty()
        || essence == GENERIC_MIME
        || [MIME_PDF, MIME_DOC, MIME_DOCX].contains(&essence.as_str())
}
