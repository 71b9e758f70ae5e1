use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Color roles a theme must resolve.
///
/// Components never hold raw colors; they ask the active [`Theme`] for a
/// role, so swapping the palette restyles the whole UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    // Chrome
    pub background: Color,
    pub panel: Color,
    pub panel_muted: Color,
    pub border: Color,
    pub divider: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accents
    pub accent: Color,
    pub accent_alt: Color,

    // Status line signals
    pub info: Color,
    pub success: Color,
    pub error: Color,

    // Interaction
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    /// Backdrop behind modal dialogs. Darker than `background` so the
    /// dialog reads as elevated.
    pub overlay: Color,

    // Zebra striping for table bodies
    pub row_even: Color,
    pub row_odd: Color,
}

/// A palette plus the style constructors shared by every component.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::new().fg(self.roles().text_primary)
    }

    fn text_secondary_style(&self) -> Style {
        Style::new().fg(self.roles().text_secondary)
    }

    fn text_muted_style(&self) -> Style {
        Style::new().fg(self.roles().text_muted)
    }

    /// Border color, switching to the focus role while focused.
    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::new().fg(if focused { roles.focus } else { roles.border })
    }

    fn selection_style(&self) -> Style {
        let roles = self.roles();
        Style::new().fg(roles.selection_fg).bg(roles.selection_bg)
    }

    fn modal_background_style(&self) -> Style {
        Style::new().bg(self.roles().overlay)
    }

    fn status_info(&self) -> Style {
        Style::new().fg(self.roles().info)
    }

    fn status_success(&self) -> Style {
        Style::new().fg(self.roles().success)
    }

    fn status_error(&self) -> Style {
        Style::new().fg(self.roles().error)
    }

    fn accent_primary_style(&self) -> Style {
        Style::new().fg(self.roles().accent)
    }

    fn accent_emphasis_style(&self) -> Style {
        Style::new().fg(self.roles().accent).add_modifier(Modifier::BOLD)
    }
}
