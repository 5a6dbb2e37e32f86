//! Axum route handler for the Preview API.

use axum::Json;
use tracing::debug;

use crate::preview::{compose_preview, PreviewPayload, PreviewRequest};

/// POST /api/v1/preview
///
/// Resolves theme variables and skill/technology icons for one template render.
/// Malformed `content` never fails the request; unrecognised shapes are skipped.
pub async fn handle_preview(Json(request): Json<PreviewRequest>) -> Json<PreviewPayload> {
    let payload = compose_preview(&request);
    debug!(
        "Composed {:?} preview: theme={} skills={} projects={}",
        payload.template,
        payload.theme.key,
        payload.skills.len(),
        payload.projects.len()
    );
    Json(payload)
}
