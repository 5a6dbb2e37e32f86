//! Static color-theme table shared by every portfolio template.
//!
//! Themes are selected by key and never edited at runtime: "changing the
//! theme" means picking a different key. Unknown keys resolve to
//! [`DEFAULT_THEME_KEY`].

use serde::Serialize;

/// Key of the canonical theme used whenever a requested key is unknown.
pub const DEFAULT_THEME_KEY: &str = "purple-pink";

/// A complete color palette. Every field is populated for every theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDefinition {
    pub key: &'static str,
    pub display_name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub primary_hover: &'static str,
    pub secondary_hover: &'static str,
    /// Light tint for highlighted text and badges.
    pub accent: &'static str,
    pub background: &'static str,
    /// Elevated-panel color drawn on top of `background`.
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub glow: &'static str,
    /// Translucent `primary` used behind skill badges.
    pub skill_bg: &'static str,
    pub skill_border: &'static str,
}

// Declaration order is the listing order exposed by the API.
static THEMES: [ThemeDefinition; 8] = [
    ThemeDefinition {
        key: "purple-pink",
        display_name: "Purple Pink",
        primary: "#8b5cf6",
        secondary: "#ec4899",
        primary_hover: "#7c3aed",
        secondary_hover: "#db2777",
        accent: "#c4b5fd",
        background: "#0f0a1a",
        surface: "#1a1329",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(139, 92, 246, 0.2)",
        shadow: "rgba(139, 92, 246, 0.25)",
        glow: "rgba(236, 72, 153, 0.4)",
        skill_bg: "rgba(139, 92, 246, 0.1)",
        skill_border: "rgba(139, 92, 246, 0.3)",
    },
    ThemeDefinition {
        key: "blue-cyan",
        display_name: "Blue Cyan",
        primary: "#3b82f6",
        secondary: "#06b6d4",
        primary_hover: "#2563eb",
        secondary_hover: "#0891b2",
        accent: "#93c5fd",
        background: "#0a0f1a",
        surface: "#111a2e",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(59, 130, 246, 0.2)",
        shadow: "rgba(59, 130, 246, 0.25)",
        glow: "rgba(6, 182, 212, 0.4)",
        skill_bg: "rgba(59, 130, 246, 0.1)",
        skill_border: "rgba(59, 130, 246, 0.3)",
    },
    ThemeDefinition {
        key: "green-teal",
        display_name: "Green Teal",
        primary: "#22c55e",
        secondary: "#14b8a6",
        primary_hover: "#16a34a",
        secondary_hover: "#0d9488",
        accent: "#86efac",
        background: "#0a1a10",
        surface: "#10261a",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(34, 197, 94, 0.2)",
        shadow: "rgba(34, 197, 94, 0.25)",
        glow: "rgba(20, 184, 166, 0.4)",
        skill_bg: "rgba(34, 197, 94, 0.1)",
        skill_border: "rgba(34, 197, 94, 0.3)",
    },
    ThemeDefinition {
        key: "orange-red",
        display_name: "Orange Red",
        primary: "#f97316",
        secondary: "#ef4444",
        primary_hover: "#ea580c",
        secondary_hover: "#dc2626",
        accent: "#fdba74",
        background: "#1a0f0a",
        surface: "#291811",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(249, 115, 22, 0.2)",
        shadow: "rgba(249, 115, 22, 0.25)",
        glow: "rgba(239, 68, 68, 0.4)",
        skill_bg: "rgba(249, 115, 22, 0.1)",
        skill_border: "rgba(249, 115, 22, 0.3)",
    },
    ThemeDefinition {
        key: "indigo-purple",
        display_name: "Indigo Purple",
        primary: "#6366f1",
        secondary: "#a855f7",
        primary_hover: "#4f46e5",
        secondary_hover: "#9333ea",
        accent: "#a5b4fc",
        background: "#0c0a1a",
        surface: "#15122b",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(99, 102, 241, 0.2)",
        shadow: "rgba(99, 102, 241, 0.25)",
        glow: "rgba(168, 85, 247, 0.4)",
        skill_bg: "rgba(99, 102, 241, 0.1)",
        skill_border: "rgba(99, 102, 241, 0.3)",
    },
    ThemeDefinition {
        key: "pink-rose",
        display_name: "Pink Rose",
        primary: "#ec4899",
        secondary: "#f43f5e",
        primary_hover: "#db2777",
        secondary_hover: "#e11d48",
        accent: "#f9a8d4",
        background: "#1a0a12",
        surface: "#2a111d",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(236, 72, 153, 0.2)",
        shadow: "rgba(236, 72, 153, 0.25)",
        glow: "rgba(244, 63, 94, 0.4)",
        skill_bg: "rgba(236, 72, 153, 0.1)",
        skill_border: "rgba(236, 72, 153, 0.3)",
    },
    ThemeDefinition {
        key: "yellow-orange",
        display_name: "Yellow Orange",
        primary: "#eab308",
        secondary: "#f97316",
        primary_hover: "#ca8a04",
        secondary_hover: "#ea580c",
        accent: "#fde047",
        background: "#1a150a",
        surface: "#292111",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(234, 179, 8, 0.2)",
        shadow: "rgba(234, 179, 8, 0.25)",
        glow: "rgba(249, 115, 22, 0.4)",
        skill_bg: "rgba(234, 179, 8, 0.1)",
        skill_border: "rgba(234, 179, 8, 0.3)",
    },
    ThemeDefinition {
        key: "emerald-green",
        display_name: "Emerald Green",
        primary: "#10b981",
        secondary: "#22c55e",
        primary_hover: "#059669",
        secondary_hover: "#16a34a",
        accent: "#6ee7b7",
        background: "#0a1a14",
        surface: "#102820",
        text: "#f8fafc",
        text_secondary: "#cbd5e1",
        border: "rgba(16, 185, 129, 0.2)",
        shadow: "rgba(16, 185, 129, 0.25)",
        glow: "rgba(34, 197, 94, 0.4)",
        skill_bg: "rgba(16, 185, 129, 0.1)",
        skill_border: "rgba(16, 185, 129, 0.3)",
    },
];

/// Resolves a theme key to its palette, substituting the default theme for
/// unknown, empty, or missing keys. Never fails.
pub fn get_theme_colors(theme_key: Option<&str>) -> &'static ThemeDefinition {
    theme_key
        .and_then(find_theme)
        .unwrap_or_else(default_theme)
}

/// Returns `true` when `theme_key` names a registered theme (no fallback needed).
pub fn is_known_theme(theme_key: &str) -> bool {
    find_theme(theme_key).is_some()
}

/// All registered themes in listing order.
pub fn all_themes() -> &'static [ThemeDefinition] {
    &THEMES
}

pub fn theme_keys() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|t| t.key)
}

fn find_theme(theme_key: &str) -> Option<&'static ThemeDefinition> {
    THEMES.iter().find(|t| t.key == theme_key)
}

fn default_theme() -> &'static ThemeDefinition {
    // THEMES[0] is DEFAULT_THEME_KEY; asserted by tests.
    &THEMES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENUMERATED_KEYS: [&str; 8] = [
        "purple-pink",
        "blue-cyan",
        "green-teal",
        "orange-red",
        "indigo-purple",
        "pink-rose",
        "yellow-orange",
        "emerald-green",
    ];

    #[test]
    fn test_default_slot_is_purple_pink() {
        assert_eq!(default_theme().key, DEFAULT_THEME_KEY);
    }

    #[test]
    fn test_every_enumerated_key_resolves_to_itself() {
        for key in ENUMERATED_KEYS {
            assert_eq!(get_theme_colors(Some(key)).key, key);
            assert!(is_known_theme(key), "{key} should be registered");
        }
        assert_eq!(theme_keys().collect::<Vec<_>>(), ENUMERATED_KEYS);
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        assert_eq!(get_theme_colors(None), get_theme_colors(Some("purple-pink")));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert_eq!(
            get_theme_colors(Some("not-a-real-theme")),
            get_theme_colors(Some("purple-pink"))
        );
        assert!(!is_known_theme("not-a-real-theme"));
    }

    #[test]
    fn test_empty_key_falls_back_to_default() {
        assert_eq!(get_theme_colors(Some("")).key, DEFAULT_THEME_KEY);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Keys are identifiers, not labels.
        assert_eq!(get_theme_colors(Some("Blue-Cyan")).key, DEFAULT_THEME_KEY);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = theme_keys().collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), THEMES.len());
    }

    #[test]
    fn test_no_theme_has_blank_fields() {
        for t in all_themes() {
            let fields = [
                t.key,
                t.display_name,
                t.primary,
                t.secondary,
                t.primary_hover,
                t.secondary_hover,
                t.accent,
                t.background,
                t.surface,
                t.text,
                t.text_secondary,
                t.border,
                t.shadow,
                t.glow,
                t.skill_bg,
                t.skill_border,
            ];
            assert!(
                fields.iter().all(|f| !f.trim().is_empty()),
                "theme {} has a blank field",
                t.key
            );
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(get_theme_colors(Some("blue-cyan"))).unwrap();
        assert_eq!(json["displayName"], "Blue Cyan");
        assert_eq!(json["primaryHover"], "#2563eb");
        assert_eq!(json["skillBorder"], "rgba(59, 130, 246, 0.3)");
    }
}
