use ratatui::style::Color;

use super::{Ansi256Theme, Ansi256ThemeHighContrast, DraculaTheme, DraculaThemeHighContrast, Theme};

/// Describes a selectable theme inside the TUI.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for lookups.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Short description rendered by `--list-themes`.
    pub description: &'static str,
    /// Color chips summarizing the palette.
    pub swatch: ThemeSwatch,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Indicates whether the definition represents a high-contrast variant.
    pub is_high_contrast: bool,
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Minimal set of colors that summarize each palette.
#[derive(Clone, Copy, Debug)]
pub struct ThemeSwatch {
    pub background: Color,
    pub accent: Color,
    pub selection: Color,
}

/// Ordered list of selectable themes surfaced by the loaders and `--list-themes`.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        description: "High-contrast default tuned for dark terminals.",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x28, 0x2A, 0x36),
            accent: Color::Rgb(0xFF, 0x79, 0xC6),
            selection: Color::Rgb(0x44, 0x47, 0x5A),
        },
        aliases: &["dracula"],
        is_high_contrast: false,
        is_ansi_fallback: false,
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "dracula_hc",
        label: "Dracula High Contrast",
        description: "Sharper borders and brighter copy for dim displays.",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x28, 0x2A, 0x36),
            accent: Color::Rgb(0xBD, 0x93, 0xF9),
            selection: Color::Rgb(0x44, 0x47, 0x5A),
        },
        aliases: &["dracula_hc", "dracula-high-contrast", "dracula-hc", "draculahc"],
        is_high_contrast: true,
        is_ansi_fallback: false,
        factory: || Box::new(DraculaThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        description: "Indexed fallback for 8-bit terminals.",
        swatch: ThemeSwatch {
            background: Color::Indexed(236),
            accent: Color::Indexed(212),
            selection: Color::Indexed(239),
        },
        aliases: &["ansi256"],
        is_high_contrast: false,
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
    ThemeDefinition {
        id: "ansi256_hc",
        label: "ANSI 256 High Contrast",
        description: "ANSI fallback with brighter borders and text.",
        swatch: ThemeSwatch {
            background: Color::Indexed(236),
            accent: Color::Indexed(141),
            selection: Color::Indexed(239),
        },
        aliases: &["ansi256_hc", "ansi256-high-contrast", "ansi256-hc", "ansi256hc"],
        is_high_contrast: true,
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256ThemeHighContrast::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by canonical id.
pub fn find_by_id(id: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| definition.id.eq_ignore_ascii_case(id))
}

/// Locate a definition by alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized)) || definition.id.eq_ignore_ascii_case(&normalized)
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == "dracula")
        .expect("dracula theme registered")
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == "ansi256")
        .expect("ansi256 theme registered")
}

/// Formatted rows for `--list-themes`: id, label, swatch chips, description.
pub fn listing() -> Vec<String> {
    THEME_DEFINITIONS
        .iter()
        .map(|definition| {
            let ThemeSwatch {
                background,
                accent,
                selection,
            } = definition.swatch;
            format!(
                "{:<12} {:<24} bg {} accent {} selection {}  {}",
                definition.id,
                definition.label,
                color_chip(background),
                color_chip(accent),
                color_chip(selection),
                definition.description,
            )
        })
        .collect()
}

fn color_chip(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        Color::Indexed(i) => format!("ansi{i}"),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_aliases_in_any_case() {
        assert_eq!(resolve("Dracula-HC").map(|d| d.id), Some("dracula_hc"));
        assert_eq!(resolve("ANSI256").map(|d| d.id), Some("ansi256"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn listing_covers_every_definition() {
        let rows = listing();
        assert_eq!(rows.len(), all().len());
        assert!(rows[0].contains("dracula"));
        assert!(rows[0].contains("#282a36"));
    }
}
