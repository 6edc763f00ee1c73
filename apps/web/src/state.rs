use std::sync::Arc;

use crate::config::Config;
use crate::store::ResultStore;
use crate::theme::ThemeState;
use crate::upload::client::ScreeningService;
use crate::upload::validation::UploadPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote screening backend. Default: HttpScreeningClient.
    pub screening: Arc<dyn ScreeningService>,
    /// Result sets awaiting display, keyed by set id.
    pub store: ResultStore,
    pub theme: ThemeState,
}

impl AppState {
    pub fn new(config: Config, screening: Arc<dyn ScreeningService>) -> Self {
        let store = ResultStore::new(config.result_store_capacity);
        Self {
            config,
            screening,
            store,
            theme: ThemeState::default(),
        }
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_file_bytes: self.config.max_resume_bytes,
        }
    }
}
