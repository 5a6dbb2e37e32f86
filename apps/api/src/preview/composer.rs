//! Live-preview composition: resolves the theme and every displayed skill or
//! technology tag for one render of a template.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::preview::content::{extract_project_labels, extract_skill_labels};
use crate::skills::resolver::resolve_skill_badges;
use crate::skills::SkillBadge;
use crate::theme::variables::project;
use crate::theme::{get_theme_colors, is_known_theme, ThemeDefinition, ThemeVariables};

/// The four portfolio templates. Rendering lives in the front-end; the
/// server only echoes which one the payload was composed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    #[default]
    Modern,
    Minimal,
    Creative,
    Professional,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub content: Value,
    #[serde(default, alias = "colorTheme")]
    pub color_theme: Option<String>,
    #[serde(default)]
    pub template: TemplateKind,
    #[serde(default, alias = "iconSize")]
    pub icon_size: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectPreview {
    pub title: Option<String>,
    pub technologies: Vec<SkillBadge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewPayload {
    pub template: TemplateKind,
    /// True when `color_theme` was missing or unknown and the default was used.
    pub theme_fallback: bool,
    pub theme: &'static ThemeDefinition,
    pub variables: ThemeVariables,
    pub skills: Vec<SkillBadge>,
    pub projects: Vec<ProjectPreview>,
}

pub fn compose_preview(request: &PreviewRequest) -> PreviewPayload {
    let requested = request.color_theme.as_deref();
    let theme = get_theme_colors(requested);
    let size = request.icon_size.as_deref();

    let skills = resolve_skill_badges(extract_skill_labels(&request.content), size);
    let projects = extract_project_labels(&request.content)
        .into_iter()
        .map(|p| ProjectPreview {
            title: p.title,
            technologies: resolve_skill_badges(p.technologies, size),
        })
        .collect();

    PreviewPayload {
        template: request.template,
        theme_fallback: !requested.is_some_and(is_known_theme),
        theme,
        variables: project(theme),
        skills,
        projects,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::skills::icons::{BrandIcon, GeneralIcon, IconRef};
    use crate::theme::palette::DEFAULT_THEME_KEY;

    fn request(body: Value) -> PreviewRequest {
        serde_json::from_value(body).expect("valid preview request")
    }

    #[test]
    fn test_full_preview() {
        let payload = compose_preview(&request(json!({
            "content": {
                "hero": { "name": "Ada" },
                "skills": ["React Native", "custom neural pipeline", "xyzzy123"],
                "projects": [
                    { "title": "Folio", "technologies": ["Node.js", "PostgreSQL"] }
                ]
            },
            "colorTheme": "blue-cyan",
            "template": "creative",
            "iconSize": "1.25em"
        })));

        assert_eq!(payload.template, TemplateKind::Creative);
        assert!(!payload.theme_fallback);
        assert_eq!(payload.theme.key, "blue-cyan");
        assert_eq!(payload.variables.theme_key, "blue-cyan");

        let icons: Vec<_> = payload.skills.iter().map(|b| b.resolved.icon).collect();
        assert_eq!(
            icons,
            [
                IconRef::Brand(BrandIcon::React),
                IconRef::General(GeneralIcon::Brain),
                IconRef::General(GeneralIcon::Code),
            ]
        );
        assert!(payload
            .skills
            .iter()
            .all(|b| b.resolved.size.as_deref() == Some("1.25em")));

        assert_eq!(payload.projects.len(), 1);
        let tech = &payload.projects[0].technologies;
        assert_eq!(tech[0].resolved.icon, IconRef::Brand(BrandIcon::NodeJs));
        assert_eq!(tech[1].resolved.icon, IconRef::Brand(BrandIcon::PostgreSql));
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let payload = compose_preview(&request(json!({})));
        assert_eq!(payload.template, TemplateKind::Modern);
        assert!(payload.theme_fallback);
        assert_eq!(payload.theme.key, DEFAULT_THEME_KEY);
        assert!(payload.skills.is_empty());
        assert!(payload.projects.is_empty());
    }

    #[test]
    fn test_unknown_theme_is_substituted() {
        let payload = compose_preview(&request(json!({ "color_theme": "neon-void" })));
        assert!(payload.theme_fallback);
        assert_eq!(payload.theme.key, DEFAULT_THEME_KEY);
        assert_eq!(payload.variables.theme_key, DEFAULT_THEME_KEY);
    }

    #[test]
    fn test_unknown_template_is_rejected_by_deserializer() {
        let parsed: Result<PreviewRequest, _> =
            serde_json::from_value(json!({ "template": "brutalist" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_payload_serializes_for_renderer() {
        let payload = compose_preview(&request(json!({
            "content": { "skills": ["Docker"] },
            "template": "professional"
        })));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["template"], "professional");
        assert_eq!(json["theme"]["key"], DEFAULT_THEME_KEY);
        assert_eq!(json["variables"]["variables"]["--theme-primary"], "#8b5cf6");
        assert_eq!(json["skills"][0]["label"], "Docker");
        assert_eq!(json["skills"][0]["icon"]["name"], "SiDocker");
    }
}
