//! Projection of a resolved theme into CSS custom properties.
//!
//! The projection is total over [`ThemeField`]: the exhaustive matches below
//! guarantee every themed field has exactly one variable name, so adding a
//! field without a variable fails to compile.
//!
//! Of the sixteen `ThemeDefinition` fields, the fourteen color values are
//! projected. `key` and `display_name` identify the theme rather than style
//! it, so they stay on the palette record and produce no variable.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::theme::palette::{get_theme_colors, ThemeDefinition};

/// The color-bearing fields of a [`ThemeDefinition`].
///
/// `key` and `display_name` identify a theme and are not projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeField {
    Primary,
    Secondary,
    PrimaryHover,
    SecondaryHover,
    Accent,
    Background,
    Surface,
    Text,
    TextSecondary,
    Border,
    Shadow,
    Glow,
    SkillBg,
    SkillBorder,
}

impl ThemeField {
    pub const ALL: [ThemeField; 14] = [
        ThemeField::Primary,
        ThemeField::Secondary,
        ThemeField::PrimaryHover,
        ThemeField::SecondaryHover,
        ThemeField::Accent,
        ThemeField::Background,
        ThemeField::Surface,
        ThemeField::Text,
        ThemeField::TextSecondary,
        ThemeField::Border,
        ThemeField::Shadow,
        ThemeField::Glow,
        ThemeField::SkillBg,
        ThemeField::SkillBorder,
    ];

    pub fn css_variable(self) -> &'static str {
        match self {
            ThemeField::Primary => "--theme-primary",
            ThemeField::Secondary => "--theme-secondary",
            ThemeField::PrimaryHover => "--theme-primary-hover",
            ThemeField::SecondaryHover => "--theme-secondary-hover",
            ThemeField::Accent => "--theme-accent",
            ThemeField::Background => "--theme-background",
            ThemeField::Surface => "--theme-surface",
            ThemeField::Text => "--theme-text",
            ThemeField::TextSecondary => "--theme-text-secondary",
            ThemeField::Border => "--theme-border",
            ThemeField::Shadow => "--theme-shadow",
            ThemeField::Glow => "--theme-glow",
            ThemeField::SkillBg => "--theme-skill-bg",
            ThemeField::SkillBorder => "--theme-skill-border",
        }
    }
}

impl ThemeDefinition {
    /// Reads one themed field.
    pub fn value(&self, field: ThemeField) -> &'static str {
        match field {
            ThemeField::Primary => self.primary,
            ThemeField::Secondary => self.secondary,
            ThemeField::PrimaryHover => self.primary_hover,
            ThemeField::SecondaryHover => self.secondary_hover,
            ThemeField::Accent => self.accent,
            ThemeField::Background => self.background,
            ThemeField::Surface => self.surface,
            ThemeField::Text => self.text,
            ThemeField::TextSecondary => self.text_secondary,
            ThemeField::Border => self.border,
            ThemeField::Shadow => self.shadow,
            ThemeField::Glow => self.glow,
            ThemeField::SkillBg => self.skill_bg,
            ThemeField::SkillBorder => self.skill_border,
        }
    }
}

/// Flat CSS-variable map for one resolved theme, ordered by variable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeVariables {
    /// Key of the theme that was actually applied (after fallback).
    pub theme_key: &'static str,
    pub variables: BTreeMap<&'static str, &'static str>,
}

/// Resolves `theme_key` (with default fallback) and projects it to CSS variables.
pub fn apply_theme_variables(theme_key: Option<&str>) -> ThemeVariables {
    project(get_theme_colors(theme_key))
}

pub fn project(theme: &'static ThemeDefinition) -> ThemeVariables {
    let variables = ThemeField::ALL
        .iter()
        .map(|&field| (field.css_variable(), theme.value(field)))
        .collect();

    ThemeVariables {
        theme_key: theme.key,
        variables,
    }
}

/// Renders the variable map as a `:root` declaration block.
pub fn css_declarations(theme_key: Option<&str>) -> String {
    let resolved = apply_theme_variables(theme_key);
    let mut css = String::from(":root {\n");
    for (name, value) in &resolved.variables {
        // Writing into a String cannot fail.
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");
    css
}
