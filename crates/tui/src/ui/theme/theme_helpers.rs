use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::roles::Theme;

/// Bordered block on the panel surface; the title renders bold.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let block = Block::bordered()
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    match title {
        Some(text) => block.title(Span::styled(
            text,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        )),
        None => block,
    }
}

fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let roles = theme.roles();
    Style::new().bg(roles.panel).fg(roles.text_primary)
}

/// Background for the whole header row; painted so column gaps match.
pub fn table_header_row_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let roles = theme.roles();
    Style::new().bg(roles.panel_muted).fg(roles.text_secondary)
}

/// Zebra-striped body row. The tones come from the theme roles; no
/// modifiers, so cell text keeps its brightness.
pub fn table_row_style<T: Theme + ?Sized>(theme: &T, row_index: usize) -> Style {
    let roles = theme.roles();
    let tone = if row_index % 2 == 0 { roles.row_even } else { roles.row_odd };
    Style::new().bg(tone).fg(roles.text_primary)
}

/// Style for the row under the cursor.
pub fn table_selected_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.selection_style().add_modifier(Modifier::BOLD)
}

/// Visual flavor of a rendered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    /// Filled accent background; the main action of a view.
    Primary,
    /// Outline-like; secondary and navigation actions.
    #[default]
    Secondary,
}

/// Options controlling how [`render_button`] draws a button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub enabled: bool,
    pub focused: bool,
    pub selected: bool,
    pub borders: Borders,
    pub button_type: ButtonType,
}

impl ButtonRenderOptions {
    pub fn new(enabled: bool, focused: bool, selected: bool, borders: Borders, button_type: ButtonType) -> Self {
        Self {
            enabled,
            focused,
            selected,
            borders,
            button_type,
        }
    }
}

fn primary_button_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let roles = theme.roles();
    Style::new().bg(roles.accent).fg(roles.text_primary).add_modifier(Modifier::BOLD)
}

fn secondary_button_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let style = Style::new().fg(theme.roles().accent_alt);
    if selected {
        style.bg(theme.roles().selection_bg)
    } else {
        style
    }
}

/// Renders a centered button label inside an optional border.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let border_style = if options.enabled {
        theme.border_style(options.focused)
    } else {
        theme.text_muted_style()
    };
    let label_style = match (options.enabled, options.button_type) {
        (true, ButtonType::Primary) => primary_button_style(theme),
        (true, ButtonType::Secondary) => secondary_button_style(theme, options.selected),
        (false, _) => theme.text_muted_style(),
    };
    // Borderless buttons pad out to the footprint of a bordered one.
    let padding = if options.borders.is_empty() {
        Padding::uniform(1)
    } else {
        Padding::ZERO
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .borders(options.borders)
                    .border_style(border_style)
                    .padding(padding),
            )
            .style(label_style),
        area,
    );
}

/// Key hint spans: an accent-colored key followed by a muted description.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(*key, theme.accent_primary_style()),
                Span::styled(*description, theme.text_muted_style()),
            ]
        })
        .collect()
}
