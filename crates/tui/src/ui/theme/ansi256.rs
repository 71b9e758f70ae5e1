//! ANSI 256-color fallback palettes for terminals without truecolor.
//!
//! Approximates the Dracula look with indexed colors so the UI stays
//! legible in macOS Terminal and other 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

const CHARCOAL: Color = Color::Indexed(236);
const SLATE: Color = Color::Indexed(239);
const NEAR_WHITE: Color = Color::Indexed(255);
const SILVER: Color = Color::Indexed(250);
const GRAY: Color = Color::Indexed(247);
const PINK: Color = Color::Indexed(212);
const SKY: Color = Color::Indexed(117);
const GREEN: Color = Color::Indexed(84);
const SALMON: Color = Color::Indexed(203);
const VIOLET: Color = Color::Indexed(141);
const DUSK: Color = Color::Indexed(61);

fn base_roles() -> ThemeRoles {
    ThemeRoles {
        background: CHARCOAL,
        panel: CHARCOAL,
        panel_muted: SLATE,
        border: SLATE,
        divider: SLATE,

        text_primary: NEAR_WHITE,
        text_secondary: SILVER,
        text_muted: GRAY,

        accent: PINK,
        accent_alt: SKY,

        info: SKY,
        success: GREEN,
        error: SALMON,

        selection_bg: SLATE,
        selection_fg: NEAR_WHITE,
        focus: SKY,
        overlay: Color::Indexed(232),

        row_even: Color::Indexed(235),
        row_odd: Color::Indexed(237),
    }
}

/// ANSI 256-color approximation of the Dracula palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self { roles: base_roles() }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast variant: violet borders and brighter secondary text.
#[derive(Debug, Clone)]
pub struct Ansi256ThemeHighContrast {
    roles: ThemeRoles,
}

impl Ansi256ThemeHighContrast {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                border: VIOLET,
                text_secondary: SKY,
                text_muted: DUSK,
                overlay: Color::Indexed(235),
                ..base_roles()
            },
        }
    }
}

impl Theme for Ansi256ThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
