// Theme Resolver: theme key -> palette -> CSS custom properties.
// Pure lookups over a static table; unknown keys fall back to purple-pink.

pub mod handlers;
pub mod palette;
pub mod variables;

pub use palette::{get_theme_colors, is_known_theme, ThemeDefinition};
pub use variables::{apply_theme_variables, ThemeVariables};
