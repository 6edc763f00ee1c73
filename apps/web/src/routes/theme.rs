use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ThemeToggleForm {
    #[serde(default)]
    pub redirect_to: Option<String>,
}

/// POST /theme/toggle
///
/// Flips the colour mode and returns to the page that asked, provided it is a
/// path on this site.
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    Form(form): Form<ThemeToggleForm>,
) -> Redirect {
    let mode = state.theme.toggle();
    tracing::debug!("Colour mode is now {}", mode.as_str());

    let target = form
        .redirect_to
        .filter(|path| is_local_path(path))
        .unwrap_or_else(|| "/upload".to_string());
    Redirect::to(&target)
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
