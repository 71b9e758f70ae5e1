use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use walletdeck_types::Effect;
use walletdeck_util::truncate_address;

use super::state::{RowMenuItem, activate};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Modal menu listing the actions available on a single wallet row.
#[derive(Debug, Default)]
pub struct RowMenuComponent {
    entry_areas: [Rect; 2],
}

impl Component for RowMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => vec![Effect::CloseModal],
            KeyCode::Up => {
                app.row_menu.move_selection(-1);
                Vec::new()
            }
            KeyCode::Down => {
                app.row_menu.move_selection(1);
                Vec::new()
            }
            KeyCode::Enter => activate(&app.row_menu, app.row_menu.selected_item()),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        for (index, area) in self.entry_areas.iter().enumerate() {
            if area.contains(position) {
                app.row_menu.set_selected(index);
                return activate(&app.row_menu, app.row_menu.selected_item());
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &app.row_menu;

        let block = th::block(theme, Some("Actions"), true);
        let inner = block.inner(rect);
        frame.render_widget(&block, rect);

        // One line per entry; the divider sits between the two entries.
        let [header_area, copy_area, divider_area, send_area, ..] = Layout::vertical([
            Constraint::Length(1), // Record address
            Constraint::Length(1), // Copy Address
            Constraint::Length(1), // Divider
            Constraint::Length(1), // Send From Wallet
        ])
        .split(inner)[..] else {
            return;
        };

        frame.render_widget(
            Paragraph::new(truncate_address(state.record_address())).style(theme.text_secondary_style()),
            header_area,
        );
        frame.render_widget(
            Paragraph::new("─".repeat(divider_area.width as usize))
                .style(Style::default().fg(theme.roles().divider)),
            divider_area,
        );

        let entries = [
            (copy_area, RowMenuItem::CopyAddress),
            (send_area, RowMenuItem::SendFromWallet),
        ];
        for (area, item) in entries {
            let style = if state.selected_item() == item {
                theme.selection_style()
            } else {
                theme.text_primary_style()
            };
            frame.render_widget(Paragraph::new(item.label()).style(style), area);
        }
        self.entry_areas = [copy_area, send_area];
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[("↑/↓", " select "), ("Enter", " run "), ("Esc", " close")],
        )
    }
}
