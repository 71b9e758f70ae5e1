use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Borders, Paragraph, Wrap};
use walletdeck_types::Effect;

use super::state::{AmountDialogState, DialogKind};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, ButtonType};

/// Modal dialog with a single numeric field and a submit button. One
/// component type drives both the airdrop and the generate dialog.
#[derive(Debug)]
pub struct AmountDialogComponent {
    kind: DialogKind,
    field_area: Rect,
    submit_area: Rect,
}

impl AmountDialogComponent {
    pub fn new(kind: DialogKind) -> Self {
        Self {
            kind,
            field_area: Rect::default(),
            submit_area: Rect::default(),
        }
    }

    fn state<'a>(&self, app: &'a App) -> &'a AmountDialogState {
        match self.kind {
            DialogKind::Airdrop => &app.airdrop,
            DialogKind::GenerateWallets => &app.generate,
        }
    }

    fn state_mut<'a>(&self, app: &'a mut App) -> &'a mut AmountDialogState {
        match self.kind {
            DialogKind::Airdrop => &mut app.airdrop,
            DialogKind::GenerateWallets => &mut app.generate,
        }
    }

    fn submit(&self, _app: &mut App) {
        // TODO: wire Send/Generate once the airdrop and generation flows exist.
    }
}

impl Component for AmountDialogComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => return vec![Effect::CloseModal],
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

        if self.state(app).f_submit.get() {
            if key.code == KeyCode::Enter {
                self.submit(app);
            }
            return Vec::new();
        }

        if self.state(app).f_amount.get() {
            // Enter hands focus to the submit button.
            if key.code == KeyCode::Enter {
                app.focus.next();
                return Vec::new();
            }
            let state = self.state_mut(app);
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    state.insert_char(c);
                }
                KeyCode::Backspace => state.amount.backspace(),
                KeyCode::Left => state.amount.move_left(),
                KeyCode::Right => state.amount.move_right(),
                KeyCode::Home => state.amount.move_home(),
                KeyCode::End => state.amount.move_end(),
                _ => {}
            }
        }

        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.field_area.contains(position) {
            let amount_id = self.state(app).f_amount.widget_id();
            app.focus.by_widget_id(amount_id);
            let label_offset = self.state(app).copy().field_label.len() as u16 + 2;
            let text_x = self.field_area.x + label_offset;
            self.state_mut(app)
                .amount
                .set_cursor_from_column(position.x.saturating_sub(text_x));
            return Vec::new();
        }

        if self.submit_area.contains(position) {
            self.submit(app);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = self.state(app);
        let copy = state.copy();

        let block = th::block(theme, Some(copy.title), true);
        let inner = block.inner(rect);
        frame.render_widget(&block, rect);

        let [description_area, _, field_area, _, button_row, ..] = self.get_preferred_layout(app, inner)[..]
        else {
            return;
        };

        frame.render_widget(
            Paragraph::new(copy.description)
                .style(theme.text_secondary_style())
                .wrap(Wrap { trim: true }),
            description_area,
        );

        let label = format!("{}: ", copy.field_label);
        let label_width = label.len() as u16;
        let input_line = Line::from(vec![
            Span::styled(label, theme.text_muted_style()),
            Span::styled(state.amount.input(), theme.text_primary_style()),
        ]);
        frame.render_widget(Paragraph::new(input_line), field_area);
        if state.f_amount.get() {
            let cursor_x = field_area.x + label_width + state.amount.cursor_columns();
            frame.set_cursor_position((cursor_x.min(field_area.right().saturating_sub(1)), field_area.y));
        }
        self.field_area = field_area;

        // Submit sits right-aligned in the footer row.
        let button_width = 12u16.min(button_row.width);
        let button_area = Rect::new(
            button_row.right().saturating_sub(button_width),
            button_row.y,
            button_width,
            button_row.height,
        );
        th::render_button(
            frame,
            button_area,
            copy.submit_label,
            theme,
            ButtonRenderOptions::new(true, state.f_submit.get(), false, Borders::ALL, ButtonType::Primary),
        );
        self.submit_area = button_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("Tab", " move "), ("Esc", " close/cancel")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(2), // Description
            Constraint::Length(1),
            Constraint::Length(1), // Amount field
            Constraint::Length(1),
            Constraint::Length(3), // Submit row
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_the_dialog() {
        let mut app = App::new(Vec::new(), Some("ansi256"));
        let mut dialog = AmountDialogComponent::new(DialogKind::Airdrop);

        let effects = dialog.handle_key_events(&mut app, KeyEvent::from(KeyCode::Esc));
        assert_eq!(effects, vec![Effect::CloseModal]);
    }

    #[test]
    fn submit_emits_no_effects() {
        let mut app = App::new(Vec::new(), Some("ansi256"));
        let mut dialog = AmountDialogComponent::new(DialogKind::GenerateWallets);

        app.generate.f_submit.set(true);
        let effects = dialog.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.generate.amount.is_empty());
    }
}
