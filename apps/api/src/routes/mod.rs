pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::preview::handlers as preview;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::theme::handlers as themes;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Theme API
        .route("/api/v1/themes", get(themes::handle_list_themes))
        .route("/api/v1/themes/:key", get(themes::handle_get_theme))
        .route(
            "/api/v1/themes/:key/variables",
            get(themes::handle_theme_variables),
        )
        .route("/api/v1/themes/:key/css", get(themes::handle_theme_css))
        // Skill icon API
        .route("/api/v1/skills/icon", get(skills::handle_skill_icon))
        .route("/api/v1/skills/icons", post(skills::handle_skill_icons))
        // Live preview
        .route("/api/v1/preview", post(preview::handle_preview))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState {
            config: Config {
                max_batch_labels: 3,
                ..Config::default()
            },
        })
    }

    async fn send(request: Request<Body>) -> Response {
        app().oneshot(request).await.unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = send(Request::get(uri).body(Body::empty()).unwrap()).await;
        into_json(response).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        into_json(send(request).await).await
    }

    async fn into_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_list_themes() {
        let (status, body) = get_json("/api/v1/themes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["default_theme"], "purple-pink");
        assert_eq!(body["themes"].as_array().unwrap().len(), 8);
        assert_eq!(body["themes"][1]["key"], "blue-cyan");
    }

    #[tokio::test]
    async fn test_get_known_theme() {
        let (status, body) = get_json("/api/v1/themes/green-teal").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallback"], false);
        assert_eq!(body["theme"]["key"], "green-teal");
    }

    #[tokio::test]
    async fn test_unknown_theme_falls_back_instead_of_404() {
        let (status, body) = get_json("/api/v1/themes/not-a-real-theme").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requested_key"], "not-a-real-theme");
        assert_eq!(body["fallback"], true);
        assert_eq!(body["theme"]["key"], "purple-pink");
    }

    #[tokio::test]
    async fn test_theme_variables() {
        let (status, body) = get_json("/api/v1/themes/pink-rose/variables").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme_key"], "pink-rose");
        assert_eq!(body["fallback"], false);
        let vars = body["variables"].as_object().unwrap();
        assert_eq!(vars.len(), 14);
        assert_eq!(vars["--theme-primary"], "#ec4899");
    }

    #[tokio::test]
    async fn test_theme_css() {
        let response = send(
            Request::get("/api/v1/themes/yellow-orange/css")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let css = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(css.contains("--theme-primary: #eab308;"));
    }

    #[tokio::test]
    async fn test_single_skill_icon() {
        let (status, body) = get_json("/api/v1/skills/icon?label=React%20Native&size=2em").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["icon"]["name"], "SiReact");
        assert_eq!(body["color"], "text-blue-400");
        assert_eq!(body["size"], "2em");
        assert_eq!(body["matched_by"]["match_key"], "react native");
    }

    #[tokio::test]
    async fn test_missing_label_gets_default_icon() {
        let (status, body) = get_json("/api/v1/skills/icon").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["icon"]["name"], "FaCode");
        assert_eq!(body["color"], "text-gray-400");
        assert_eq!(body["matched_by"]["tier"], "default");

        let (status, body) = get_json("/api/v1/skills/icon?size=sm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["icon"]["name"], "FaCode");
        assert_eq!(body["size"], "sm");
    }

    #[tokio::test]
    async fn test_empty_label_gets_default_icon() {
        let (status, body) = get_json("/api/v1/skills/icon?label=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["icon"]["name"], "FaCode");
        assert_eq!(body["color"], "text-gray-400");
    }

    #[tokio::test]
    async fn test_batch_icons_preserve_order() {
        let (status, body) = post_json(
            "/api/v1/skills/icons",
            json!({ "labels": ["PostgreSQL", "Node.js", "xyzzy123"] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let icons = body["icons"].as_array().unwrap();
        assert_eq!(icons[0]["label"], "PostgreSQL");
        assert_eq!(icons[0]["icon"]["name"], "SiPostgresql");
        assert_eq!(icons[1]["icon"]["name"], "SiNodedotjs");
        assert_eq!(icons[2]["icon"]["name"], "FaCode");
    }

    #[tokio::test]
    async fn test_batch_over_limit_is_rejected() {
        let (status, body) = post_json(
            "/api/v1/skills/icons",
            json!({ "labels": ["a", "b", "c", "d"] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_preview() {
        let (status, body) = post_json(
            "/api/v1/preview",
            json!({
                "content": {
                    "skills": [{ "name": "Languages", "items": ["Rust", "TypeScript"] }],
                    "projects": [{ "title": "Folio", "tech": ["Docker"] }]
                },
                "colorTheme": "indigo-purple",
                "template": "minimal"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "minimal");
        assert_eq!(body["theme_fallback"], false);
        assert_eq!(body["theme"]["key"], "indigo-purple");
        assert_eq!(body["skills"][0]["icon"]["name"], "SiRust");
        assert_eq!(body["skills"][1]["icon"]["name"], "SiTypescript");
        assert_eq!(
            body["projects"][0]["technologies"][0]["icon"]["name"],
            "SiDocker"
        );
    }

    #[tokio::test]
    async fn test_preview_with_malformed_content_still_succeeds() {
        let (status, body) = post_json(
            "/api/v1/preview",
            json!({ "content": { "skills": 12, "projects": "none" } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme_fallback"], true);
        assert!(body["skills"].as_array().unwrap().is_empty());
        assert!(body["projects"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_rejects_unknown_template() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/preview")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "template": "brutalist" }).to_string()))
            .unwrap();
        assert_eq!(send(request).await.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let (status, body) = get_json("/api/v1/resumes").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
