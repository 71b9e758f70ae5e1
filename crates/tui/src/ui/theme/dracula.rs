use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// Unpack a `0xRRGGBB` literal.
const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

// Dracula palette (https://draculatheme.com/contribute)
const BACKGROUND: Color = hex(0x282A36);
const CURRENT_LINE: Color = hex(0x44475A);
const FOREGROUND: Color = hex(0xF8F8F2);
const COMMENT: Color = hex(0x6272A4);
const CYAN: Color = hex(0x8BE9FD);
const GREEN: Color = hex(0x50FA7B);
const PINK: Color = hex(0xFF79C6);
const PURPLE: Color = hex(0xBD93F9);
const RED: Color = hex(0xFF5555);

fn base_roles() -> ThemeRoles {
    ThemeRoles {
        background: BACKGROUND,
        panel: BACKGROUND,
        panel_muted: CURRENT_LINE,
        border: CURRENT_LINE,
        divider: CURRENT_LINE,

        text_primary: FOREGROUND,
        text_secondary: COMMENT,
        text_muted: COMMENT,

        // Pink drives interactive elements, cyan marks focus.
        accent: PINK,
        accent_alt: CYAN,

        info: CYAN,
        success: GREEN,
        error: RED,

        selection_bg: CURRENT_LINE,
        selection_fg: FOREGROUND,
        focus: CYAN,
        overlay: hex(0x1D1F27),

        // Zebra tones bracket the background.
        row_even: hex(0x232530),
        row_odd: hex(0x2D2F3D),
    }
}

/// Default Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self { roles: base_roles() }
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Dracula: purple borders, otherwise the base palette.
#[derive(Debug, Clone)]
pub struct DraculaThemeHighContrast {
    roles: ThemeRoles,
}

impl DraculaThemeHighContrast {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                border: PURPLE,
                ..base_roles()
            },
        }
    }
}

impl Theme for DraculaThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
