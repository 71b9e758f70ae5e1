use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Borders, Cell, Paragraph, Row, Table};
use walletdeck_types::{ColumnId, Effect, Modal, SortDirection};
use walletdeck_util::{format_usd, truncate_address};

use super::state::PAGE_SIZE;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, ButtonType};

const FILTER_WIDTH: u16 = 36;
const BALANCE_WIDTH: u16 = 12;
const ACTIONS_WIDTH: u16 = 7;

/// The wallet table screen: filter row, paged table, and paging footer.
#[derive(Debug, Default)]
pub struct DashboardComponent {
    // Hit-test areas captured during render.
    filter_area: Rect,
    airdrop_button_area: Rect,
    table_area: Rect,
    address_header_area: Rect,
    actions_column_area: Rect,
    previous_button_area: Rect,
    next_button_area: Rect,
}

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if app.dashboard.f_filter.get() {
            return self.handle_filter_keys(app, key);
        }

        if key.code == KeyCode::Char('q') {
            return vec![Effect::Quit];
        }

        if app.dashboard.f_airdrop.get() && key.code == KeyCode::Enter {
            return vec![Effect::ShowModal(Modal::Airdrop)];
        }

        if app.dashboard.f_table.get() {
            return self.handle_table_keys(app, key);
        }

        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollUp if self.table_area.contains(position) => {
                app.dashboard.move_selection(-1);
                Vec::new()
            }
            MouseEventKind::ScrollDown if self.table_area.contains(position) => {
                app.dashboard.move_selection(1);
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(app, position),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let [filter_area, table_area, footer_area, ..] = self.get_preferred_layout(app, rect)[..] else {
            return;
        };

        self.render_filter_row(frame, filter_area, app);
        self.render_table(frame, table_area, app);
        self.render_footer(frame, footer_area, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        if app.dashboard.f_filter.get() {
            return th::build_hint_spans(
                &*app.ctx.theme,
                &[("Esc", " clear "), ("Enter", " to table "), ("Tab", " next focus")],
            );
        }
        th::build_hint_spans(
            &*app.ctx.theme,
            &[
                ("↑/↓", " select "),
                ("Space", " toggle row "),
                ("Enter", " actions "),
                ("s", " sort "),
                ("b", " balance column "),
                ("a", " airdrop "),
                ("PgUp/PgDn", " page "),
                ("q", " quit"),
            ],
        )
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Filter row with the airdrop button
            Constraint::Min(1),    // Wallet table
            Constraint::Length(3), // Selection summary and paging controls
        ])
        .split(area)
        .to_vec()
    }
}

impl DashboardComponent {
    fn handle_filter_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.dashboard;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.filter.insert_char(c);
                state.filter_changed();
            }
            KeyCode::Backspace => {
                state.filter.backspace();
                state.filter_changed();
            }
            KeyCode::Left => state.filter.move_left(),
            KeyCode::Right => state.filter.move_right(),
            KeyCode::Home => state.filter.move_home(),
            KeyCode::End => state.filter.move_end(),
            KeyCode::Esc => {
                state.filter.clear();
                state.filter_changed();
            }
            KeyCode::Enter | KeyCode::Down => {
                app.focus.by_widget_id(state.f_table.widget_id());
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_table_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.dashboard;
        match key.code {
            KeyCode::Up => state.move_selection(-1),
            KeyCode::Down => state.move_selection(1),
            KeyCode::PageUp => state.page_back(),
            KeyCode::PageDown => state.page_forward(),
            KeyCode::Home => state.select_first(),
            KeyCode::End => state.select_last(),
            KeyCode::Char(' ') => state.toggle_selected_row(),
            KeyCode::Char('s') => state.toggle_sort(ColumnId::Address),
            KeyCode::Char('b') => state.toggle_column(ColumnId::Balance),
            KeyCode::Char('a') => return vec![Effect::ShowModal(Modal::Airdrop)],
            KeyCode::Enter => {
                if let Some(record) = state.selected_record() {
                    app.row_menu.open_for(record);
                    return vec![Effect::ShowModal(Modal::RowActions)];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_left_click(&mut self, app: &mut App, position: Position) -> Vec<Effect> {
        if self.filter_area.contains(position) {
            app.focus.by_widget_id(app.dashboard.f_filter.widget_id());
            let text_x = self.filter_area.x + 1;
            app.dashboard
                .filter
                .set_cursor_from_column(position.x.saturating_sub(text_x));
            return Vec::new();
        }

        if self.airdrop_button_area.contains(position) {
            return vec![Effect::ShowModal(Modal::Airdrop)];
        }

        if self.address_header_area.contains(position) {
            app.dashboard.toggle_sort(ColumnId::Address);
            return Vec::new();
        }

        if self.previous_button_area.contains(position) {
            app.dashboard.page_back();
            return Vec::new();
        }

        if self.next_button_area.contains(position) {
            app.dashboard.page_forward();
            return Vec::new();
        }

        if self.table_area.contains(position) {
            app.focus.by_widget_id(app.dashboard.f_table.widget_id());
            // The first line of the table is the header row.
            if position.y > self.table_area.y {
                let row_offset = (position.y - self.table_area.y - 1) as usize;
                let state = &mut app.dashboard;
                if row_offset < state.page_indices().len() {
                    state.set_selected(state.page() * PAGE_SIZE + row_offset);
                    if self.actions_column_area.contains(position)
                        && let Some(record) = state.selected_record()
                    {
                        app.row_menu.open_for(record);
                        return vec![Effect::ShowModal(Modal::RowActions)];
                    }
                }
            }
        }

        Vec::new()
    }

    fn render_filter_row(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &app.dashboard;
        let [input_area, _, button_area, ..] = Layout::horizontal([
            Constraint::Length(FILTER_WIDTH),
            Constraint::Min(1),
            Constraint::Length(12),
        ])
        .split(area)[..] else {
            return;
        };

        let filter_focused = state.f_filter.get();
        let block = th::block(theme, None, filter_focused);
        let inner = block.inner(input_area);
        frame.render_widget(&block, input_area);

        if state.filter.is_empty() {
            frame.render_widget(
                Paragraph::new("Filter Address...").style(theme.text_muted_style()),
                inner,
            );
        } else {
            frame.render_widget(
                Paragraph::new(state.filter.input()).style(theme.text_primary_style()),
                inner,
            );
        }
        if filter_focused {
            let cursor_x = state.filter.cursor_columns().min(inner.width.saturating_sub(1));
            frame.set_cursor_position((inner.x + cursor_x, inner.y));
        }

        th::render_button(
            frame,
            button_area,
            "Airdrop",
            theme,
            ButtonRenderOptions::new(true, state.f_airdrop.get(), false, Borders::ALL, ButtonType::Primary),
        );

        self.filter_area = input_area;
        self.airdrop_button_area = button_area;
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &app.dashboard;
        let table_focused = state.f_table.get();

        let block = th::block(theme, Some("Wallets"), table_focused);
        let inner = block.inner(area);
        frame.render_widget(&block, area);
        self.table_area = inner;

        let columns: Vec<ColumnId> = [ColumnId::Address, ColumnId::Balance, ColumnId::Actions]
            .into_iter()
            .filter(|column| state.is_column_visible(*column))
            .collect();
        self.capture_column_areas(&columns, inner);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|column| match column {
                ColumnId::Address => {
                    let arrow = match state.sort() {
                        Some(key) if key.column == ColumnId::Address => match key.direction {
                            SortDirection::Ascending => "↑",
                            SortDirection::Descending => "↓",
                        },
                        _ => "↕",
                    };
                    Cell::from(Line::from(vec![
                        Span::raw("Wallet Address "),
                        Span::styled(arrow, theme.accent_primary_style()),
                    ]))
                }
                ColumnId::Balance => Cell::from(Line::from("Balance").right_aligned()),
                ColumnId::Actions => Cell::from(""),
            })
            .collect();
        let header = Row::new(header_cells).style(th::table_header_row_style(theme)).height(1);

        let rows: Vec<Row> = state
            .page_indices()
            .iter()
            .enumerate()
            .map(|(row_index, &record_index)| {
                let record = &state.records()[record_index];
                let cells: Vec<Cell> = columns
                    .iter()
                    .map(|column| match column {
                        // Address cells render lowercased; the menu shows the raw form.
                        ColumnId::Address => Cell::from(truncate_address(&record.address).to_lowercase()),
                        ColumnId::Balance => {
                            Cell::from(Line::from(format_usd(record.balance)).right_aligned())
                        }
                        ColumnId::Actions => Cell::from(Line::from("⋯").right_aligned()),
                    })
                    .collect();
                let style = if state.is_row_selected(&record.id) {
                    theme.selection_style()
                } else {
                    th::table_row_style(theme, row_index)
                };
                Row::new(cells).style(style).height(1)
            })
            .collect();

        let widths: Vec<Constraint> = columns
            .iter()
            .map(|column| match column {
                ColumnId::Address => Constraint::Min(16),
                ColumnId::Balance => Constraint::Length(BALANCE_WIDTH),
                ColumnId::Actions => Constraint::Length(ACTIONS_WIDTH),
            })
            .collect();

        let highlight = if table_focused {
            th::table_selected_style(theme)
        } else {
            Style::default()
        };
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(highlight);
        frame.render_stateful_widget(table, inner, &mut app.dashboard.table_state);

        if app.dashboard.visible().is_empty() && inner.height > 1 {
            // The empty-result row spans every column, directly under the header.
            let body = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            frame.render_widget(
                Paragraph::new("No results.").centered().style(theme.text_muted_style()),
                body,
            );
        }
    }

    /// Mirror the table's column layout so header and cell clicks can be
    /// resolved without asking the widget.
    fn capture_column_areas(&mut self, columns: &[ColumnId], inner: Rect) {
        let fixed: u16 = columns
            .iter()
            .map(|column| match column {
                ColumnId::Address => 0,
                ColumnId::Balance => BALANCE_WIDTH,
                ColumnId::Actions => ACTIONS_WIDTH,
            })
            .sum();
        let spacing = columns.len().saturating_sub(1) as u16;
        let address_width = inner.width.saturating_sub(fixed + spacing);

        self.address_header_area = Rect::default();
        self.actions_column_area = Rect::default();
        let mut x = inner.x;
        for column in columns {
            let width = match column {
                ColumnId::Address => address_width,
                ColumnId::Balance => BALANCE_WIDTH,
                ColumnId::Actions => ACTIONS_WIDTH,
            };
            match column {
                ColumnId::Address => self.address_header_area = Rect::new(x, inner.y, width, 1),
                ColumnId::Actions => self.actions_column_area = Rect::new(x, inner.y, width, inner.height),
                ColumnId::Balance => {}
            }
            x += width + 1;
        }
    }

    fn render_footer(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &app.dashboard;
        let [summary_area, page_info_area, _, previous_area, _, next_area, ..] = Layout::horizontal([
            Constraint::Min(1),     // Selection summary
            Constraint::Length(16), // Page indicator
            Constraint::Length(1),
            Constraint::Length(12), // Previous
            Constraint::Length(1),
            Constraint::Length(8), // Next
        ])
        .split(area)[..] else {
            return;
        };

        // Text lines sit on the middle row, level with the button labels.
        let summary_line = Rect { y: summary_area.y + 1, height: 1, ..summary_area };
        frame.render_widget(
            Paragraph::new(state.selection_summary()).style(theme.text_muted_style()),
            summary_line,
        );

        let page_line = Rect { y: page_info_area.y + 1, height: 1, ..page_info_area };
        frame.render_widget(
            Paragraph::new(Line::from(state.page_info()).right_aligned()).style(theme.text_secondary_style()),
            page_line,
        );

        th::render_button(
            frame,
            previous_area,
            "Previous",
            theme,
            ButtonRenderOptions::new(state.can_page_back(), false, false, Borders::ALL, ButtonType::Secondary),
        );
        th::render_button(
            frame,
            next_area,
            "Next",
            theme,
            ButtonRenderOptions::new(state.can_page_forward(), false, false, Borders::ALL, ButtonType::Secondary),
        );

        self.previous_button_area = previous_area;
        self.next_button_area = next_area;
    }
}
