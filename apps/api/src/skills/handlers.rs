//! Axum route handlers for the Skill Icon API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::skills::resolver::resolve_skill_badges;
use crate::skills::{get_skill_icon, ResolvedIcon, SkillBadge};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IconQuery {
    /// Missing `label` is empty input and resolves to the default icon.
    #[serde(default)]
    pub label: String,
    pub size: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchIconRequest {
    pub labels: Vec<String>,
    pub size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchIconResponse {
    pub icons: Vec<SkillBadge>,
}

/// GET /api/v1/skills/icon?label=...&size=...
pub async fn handle_skill_icon(Query(query): Query<IconQuery>) -> Json<ResolvedIcon> {
    let resolved = get_skill_icon(&query.label, query.size.as_deref());
    debug!("Skill '{}' resolved to {}", query.label, resolved.icon.symbol());
    Json(resolved)
}

/// POST /api/v1/skills/icons
///
/// Resolves every label in request order. Duplicates are resolved independently.
pub async fn handle_skill_icons(
    State(state): State<AppState>,
    Json(request): Json<BatchIconRequest>,
) -> Result<Json<BatchIconResponse>, AppError> {
    let limit = state.config.max_batch_labels;
    if request.labels.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} labels per request, got {}",
            request.labels.len()
        )));
    }

    debug!("Resolving {} skill labels", request.labels.len());
    let icons = resolve_skill_badges(request.labels, request.size.as_deref());
    Ok(Json(BatchIconResponse { icons }))
}
