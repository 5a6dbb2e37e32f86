//! Axum route handlers for the Theme API.
//!
//! Unknown keys are never a 404: the default theme is substituted and the
//! response carries `fallback: true`.

use axum::{extract::Path, http::header, response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use crate::theme::palette::{all_themes, DEFAULT_THEME_KEY};
use crate::theme::variables::css_declarations;
use crate::theme::{
    apply_theme_variables, get_theme_colors, is_known_theme, ThemeDefinition, ThemeVariables,
};

#[derive(Debug, Serialize)]
pub struct ThemeListResponse {
    pub default_theme: &'static str,
    pub themes: &'static [ThemeDefinition],
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub requested_key: String,
    pub fallback: bool,
    pub theme: &'static ThemeDefinition,
}

#[derive(Debug, Serialize)]
pub struct ThemeVariablesResponse {
    pub requested_key: String,
    pub fallback: bool,
    #[serde(flatten)]
    pub resolved: ThemeVariables,
}

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<ThemeListResponse> {
    Json(ThemeListResponse {
        default_theme: DEFAULT_THEME_KEY,
        themes: all_themes(),
    })
}

/// GET /api/v1/themes/:key
pub async fn handle_get_theme(Path(key): Path<String>) -> Json<ThemeResponse> {
    let fallback = note_fallback(&key);
    Json(ThemeResponse {
        theme: get_theme_colors(Some(&key)),
        requested_key: key,
        fallback,
    })
}

/// GET /api/v1/themes/:key/variables
pub async fn handle_theme_variables(Path(key): Path<String>) -> Json<ThemeVariablesResponse> {
    let fallback = note_fallback(&key);
    Json(ThemeVariablesResponse {
        resolved: apply_theme_variables(Some(&key)),
        requested_key: key,
        fallback,
    })
}

/// GET /api/v1/themes/:key/css
///
/// Returns a `:root` block ready for stylesheet injection.
pub async fn handle_theme_css(Path(key): Path<String>) -> impl IntoResponse {
    note_fallback(&key);
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        css_declarations(Some(&key)),
    )
}

fn note_fallback(key: &str) -> bool {
    let fallback = !is_known_theme(key);
    if fallback {
        debug!("Unknown theme '{key}', substituting {DEFAULT_THEME_KEY}");
    }
    fallback
}
