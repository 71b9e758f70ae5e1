use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Borders, Paragraph};
use walletdeck_types::{Effect, Modal};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, ButtonType};

/// Full-screen prompt shown when no wallet records are loaded.
#[derive(Debug, Default)]
pub struct EmptyStateComponent {
    generate_button_area: Rect,
}

impl Component for EmptyStateComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Enter if app.empty_screen.f_generate.get() => {
                vec![Effect::ShowModal(Modal::GenerateWallets)]
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, _app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self.generate_button_area.contains(Position::new(mouse.column, mouse.row))
        {
            return vec![Effect::ShowModal(Modal::GenerateWallets)];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let [_, title_area, subtitle_area, _, button_row, ..] = self.get_preferred_layout(app, rect)[..]
        else {
            return;
        };

        frame.render_widget(
            Paragraph::new("No Wallet Address")
                .centered()
                .style(theme.accent_emphasis_style()),
            title_area,
        );
        frame.render_widget(
            Paragraph::new("Click the generate button below to generate Wallet addresses")
                .centered()
                .style(theme.text_muted_style()),
            subtitle_area,
        );

        let button_width = 29u16.min(button_row.width);
        let button_area = Rect::new(
            button_row.x + button_row.width.saturating_sub(button_width) / 2,
            button_row.y,
            button_width,
            button_row.height,
        );
        th::render_button(
            frame,
            button_area,
            "Generate Wallet Addresses",
            theme,
            ButtonRenderOptions::new(
                true,
                app.empty_screen.f_generate.get(),
                false,
                Borders::ALL,
                ButtonType::Primary,
            ),
        );
        self.generate_button_area = button_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("Enter", " generate "), ("q", " quit")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Percentage(35),
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Generate button
        ])
        .split(area)
        .to_vec()
    }
}
