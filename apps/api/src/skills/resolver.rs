//! Skill label → icon resolution.
//!
//! Three tiers, each first-match-wins in declaration order:
//! 1. dictionary pass (substring containment against `SKILL_DICTIONARY`)
//! 2. category pass (any keyword of a `CATEGORY_FALLBACKS` rule)
//! 3. generic `FaCode` default
//!
//! The resolver is total: every input, including empty or non-ASCII text,
//! produces an icon.

use serde::Serialize;

use crate::skills::dictionary::{
    CategoryFallbackRule, SkillIconRule, CATEGORY_FALLBACKS, DEFAULT_COLOR, DEFAULT_ICON,
    SKILL_DICTIONARY,
};
use crate::skills::icons::IconRef;

/// Which tier produced a [`ResolvedIcon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum MatchSource {
    Dictionary { match_key: &'static str },
    Category { category: &'static str },
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIcon {
    pub icon: IconRef,
    pub color: &'static str,
    /// Size token passed through untouched for the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub matched_by: MatchSource,
}

impl ResolvedIcon {
    fn from_rule(rule: &SkillIconRule, size: Option<&str>) -> Self {
        ResolvedIcon {
            icon: rule.icon,
            color: rule.color,
            size: size.map(str::to_owned),
            matched_by: MatchSource::Dictionary {
                match_key: rule.match_key,
            },
        }
    }

    fn from_category(rule: &CategoryFallbackRule, size: Option<&str>) -> Self {
        ResolvedIcon {
            icon: rule.icon,
            color: rule.color,
            size: size.map(str::to_owned),
            matched_by: MatchSource::Category {
                category: rule.category,
            },
        }
    }

    fn fallback(size: Option<&str>) -> Self {
        ResolvedIcon {
            icon: IconRef::General(DEFAULT_ICON),
            color: DEFAULT_COLOR,
            size: size.map(str::to_owned),
            matched_by: MatchSource::Default,
        }
    }
}

/// A label paired with its resolved icon, as rendered in a skill badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBadge {
    pub label: String,
    #[serde(flatten)]
    pub resolved: ResolvedIcon,
}

impl SkillBadge {
    pub fn new(label: impl Into<String>, size: Option<&str>) -> Self {
        let label = label.into();
        let resolved = get_skill_icon(&label, size);
        SkillBadge { label, resolved }
    }
}

/// Resolves a free-text skill label to an icon and color class.
pub fn get_skill_icon(label: &str, size: Option<&str>) -> ResolvedIcon {
    let normalized = normalize(label);
    if normalized.is_empty() {
        return ResolvedIcon::fallback(size);
    }

    if let Some(rule) = SKILL_DICTIONARY
        .iter()
        .find(|rule| normalized.contains(rule.match_key))
    {
        return ResolvedIcon::from_rule(rule, size);
    }

    if let Some(rule) = CATEGORY_FALLBACKS
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
    {
        return ResolvedIcon::from_category(rule, size);
    }

    ResolvedIcon::fallback(size)
}

/// Resolves a batch of labels into badges, preserving input order.
pub fn resolve_skill_badges<I>(labels: I, size: Option<&str>) -> Vec<SkillBadge>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    labels
        .into_iter()
        .map(|label| SkillBadge::new(label, size))
        .collect()
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
