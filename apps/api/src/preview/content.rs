//! Tolerant extraction of skill and technology labels from author content.
//!
//! `content` is whatever JSON the editor saved. Nothing here fails: shapes we
//! do not recognise contribute no labels.

use serde_json::Value;

const LABEL_FIELDS: &[&str] = &["name", "label", "title"];
const GROUP_FIELDS: &[&str] = &["items", "skills"];
const PROJECT_TECH_FIELDS: &[&str] = &["technologies", "techStack", "tech_stack", "tech", "tags"];

/// Technologies declared on one project, in authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLabels {
    pub title: Option<String>,
    pub technologies: Vec<String>,
}

/// Collects labels from `content.skills`.
///
/// Accepted shapes: `["Rust", ...]`, `[{"name": "Rust"}, ...]`,
/// `[{"category": "...", "items": [...]}, ...]`, and `{"Backend": [...], ...}`.
pub fn extract_skill_labels(content: &Value) -> Vec<String> {
    let mut labels = Vec::new();
    match content.get("skills") {
        Some(Value::Array(entries)) => {
            for entry in entries {
                collect_entry(entry, &mut labels, true);
            }
        }
        Some(Value::Object(groups)) => {
            for group in groups.values() {
                collect_entry(group, &mut labels, true);
            }
        }
        _ => {}
    }
    labels
}

/// Collects per-project technology labels from `content.projects`.
pub fn extract_project_labels(content: &Value) -> Vec<ProjectLabels> {
    let Some(projects) = content.get("projects").and_then(Value::as_array) else {
        return Vec::new();
    };

    projects
        .iter()
        .filter(|p| p.is_object())
        .map(|project| {
            let title = first_string(project, &["title", "name"]).map(str::to_owned);
            let technologies = PROJECT_TECH_FIELDS
                .iter()
                .find_map(|field| project.get(*field).and_then(Value::as_array))
                .map(|items| string_items(items))
                .unwrap_or_default();
            ProjectLabels {
                title,
                technologies,
            }
        })
        .collect()
}

// `descend` allows one level of group nesting; labels inside a group are leaves.
fn collect_entry(entry: &Value, labels: &mut Vec<String>, descend: bool) {
    match entry {
        Value::String(s) => push_label(s, labels),
        Value::Array(items) if descend => {
            for item in items {
                collect_entry(item, labels, false);
            }
        }
        Value::Object(_) => {
            if let Some(label) = first_string(entry, LABEL_FIELDS).filter(|_| !is_group(entry)) {
                push_label(label, labels);
            } else if descend {
                if let Some(items) = GROUP_FIELDS
                    .iter()
                    .find_map(|field| entry.get(*field).and_then(Value::as_array))
                {
                    for item in items {
                        collect_entry(item, labels, false);
                    }
                }
            }
        }
        _ => {}
    }
}

fn is_group(entry: &Value) -> bool {
    GROUP_FIELDS
        .iter()
        .any(|field| entry.get(*field).is_some_and(Value::is_array))
}

fn first_string<'a>(entry: &'a Value, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .find_map(|field| entry.get(*field).and_then(Value::as_str))
}

fn string_items(items: &[Value]) -> Vec<String> {
    let mut labels = Vec::new();
    for item in items {
        match item {
            Value::String(s) => push_label(s, &mut labels),
            Value::Object(_) => {
                if let Some(label) = first_string(item, LABEL_FIELDS) {
                    push_label(label, &mut labels);
                }
            }
            _ => {}
        }
    }
    labels
}

fn push_label(raw: &str, labels: &mut Vec<String>) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        labels.push(trimmed.to_string());
    }
}
