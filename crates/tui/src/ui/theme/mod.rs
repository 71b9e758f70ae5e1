//! Theme styling module for the TUI UI layer.
//!
//! This module defines the Dracula color palette, an ANSI 256-color fallback,
//! semantic theme roles, and helper builders for Ratatui widgets and styles.
//! Prefer these helpers over hard-coding colors to keep the UI consistent.

use std::env;

use tracing::{debug, warn};

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::{Ansi256Theme, Ansi256ThemeHighContrast};
pub use catalog::{ThemeDefinition, ThemeSwatch};
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use roles::Theme;

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on environment variables, CLI preference, and terminal capabilities.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    let requested = requested_definition(preferred_theme);

    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        let definition = requested.map(ansi_equivalent).unwrap_or_else(catalog::default_ansi);
        if requested.is_some_and(|r| r.id != definition.id) {
            debug!("ANSI-only terminal detected; substituting {} for the requested theme.", definition.id);
        }
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(requested.unwrap_or_else(catalog::default_truecolor))
}

/// Resolve the theme override chain: env var first, then the CLI flag.
fn requested_definition(preferred_theme: Option<&str>) -> Option<&'static ThemeDefinition> {
    if let Ok(theme_name) = env::var("WALLETDECK_THEME") {
        if let Some(definition) = catalog::resolve(theme_name.trim()) {
            return Some(definition);
        }
        warn!("Unknown theme {theme_name:?} in WALLETDECK_THEME; ignoring.");
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = catalog::resolve(name.trim())
    {
        return Some(definition);
    }

    None
}

/// Map a requested theme onto the closest palette an 8-bit terminal can show.
fn ansi_equivalent(definition: &'static ThemeDefinition) -> &'static ThemeDefinition {
    if definition.is_ansi_fallback {
        return definition;
    }
    if definition.is_high_contrast {
        return catalog::find_by_id("ansi256_hc").unwrap_or_else(catalog::default_ansi);
    }
    catalog::default_ansi()
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("WALLETDECK_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    if env::var("WALLETDECK_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_parsing() {
        assert_eq!(parse_color_mode("TRUECOLOR"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("256"), Some(ColorCapability::Ansi256));
        assert_eq!(parse_color_mode("vga"), None);
    }

    #[test]
    fn ansi_equivalent_preserves_contrast_preference() {
        let dracula_hc = catalog::find_by_id("dracula_hc").unwrap();
        assert_eq!(ansi_equivalent(dracula_hc).id, "ansi256_hc");

        let dracula = catalog::find_by_id("dracula").unwrap();
        assert_eq!(ansi_equivalent(dracula).id, "ansi256");

        let ansi = catalog::find_by_id("ansi256_hc").unwrap();
        assert_eq!(ansi_equivalent(ansi).id, "ansi256_hc");
    }
}
