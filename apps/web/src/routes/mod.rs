pub mod health;
pub mod theme;

use axum::{
    extract::DefaultBodyLimit,
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::screening::handlers as results;
use crate::state::AppState;
use crate::upload::handlers as upload;

async fn redirect_to_upload() -> Redirect {
    Redirect::to("/upload")
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_request_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(redirect_to_upload))
        .route("/theme/toggle", post(theme::handle_toggle_theme))
        // Upload
        .route(
            "/upload",
            get(upload::handle_upload_page).post(upload::handle_upload_submit),
        )
        // Results
        .route("/results", get(results::handle_results_without_set))
        .route("/results/:id", get(results::handle_results_page))
        .route("/results/:id/export.csv", get(results::handle_export_csv))
        .route("/results/:id/clear", post(results::handle_clear_results))
        // JSON API
        .route("/api/v1/screenings", post(upload::handle_create_screening))
        .route(
            "/api/v1/screenings/:id",
            get(results::handle_get_screening).delete(results::handle_delete_screening),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
