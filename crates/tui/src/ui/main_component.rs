use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::widgets::Clear;
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Paragraph},
};
use walletdeck_types::{Effect, Modal, Msg};

use super::components::amount_dialog::DialogKind;
use super::components::{AmountDialogComponent, Component, RowMenuComponent};
use super::utils::{centered_min_max, centered_rect};
use crate::app::{App, StatusLevel};

pub struct ModalLayout(Box<dyn Fn(Rect) -> Rect>);

impl std::fmt::Debug for ModalLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ModalLayout")
    }
}

type ModalView = (Box<dyn Component>, ModalLayout);

#[derive(Default, Debug)]
pub struct MainView {
    /// Current main view component
    pub content_view: Option<Box<dyn Component>>,
    /// Currently open modal component
    pub modal_view: Option<ModalView>,

    /// the widget_id of the focus just before a modal is opened
    transient_focus_id: Option<usize>,
}

impl MainView {
    pub fn new(content_view: Option<Box<dyn Component>>) -> Self {
        Self {
            content_view,
            modal_view: None,
            transient_focus_id: None,
        }
    }

    /// Update the open modal kind (use None to clear).
    pub fn set_open_modal_kind(&mut self, app: &mut App, modal: Option<Modal>) {
        if let Some(modal_kind) = modal.as_ref() {
            let modal_view: ModalView = match modal_kind {
                Modal::RowActions => (
                    Box::new(RowMenuComponent::default()),
                    ModalLayout(Box::new(|rect| centered_rect(30, 30, rect))),
                ),
                Modal::Airdrop => {
                    app.airdrop.reset();
                    (
                        Box::new(AmountDialogComponent::new(DialogKind::Airdrop)),
                        ModalLayout(Box::new(|rect| {
                            centered_min_max(45, 35, Rect::new(0, 0, 60, 12), Rect::new(0, 0, 90, 14), rect)
                        })),
                    )
                }
                Modal::GenerateWallets => {
                    app.generate.reset();
                    (
                        Box::new(AmountDialogComponent::new(DialogKind::GenerateWallets)),
                        ModalLayout(Box::new(|rect| {
                            centered_min_max(45, 35, Rect::new(0, 0, 60, 12), Rect::new(0, 0, 90, 14), rect)
                        })),
                    )
                }
            };
            self.modal_view = Some(modal_view);
            // save the current focus to restore when the modal is closed
            self.transient_focus_id = app.focus.focused().map(|focus| focus.widget_id());
        } else {
            self.modal_view = None;
        }
        app.open_modal_kind = modal;
    }

    pub fn restore_focus(&mut self, app: &mut App) {
        if let Some(id) = self.transient_focus_id
            && app.open_modal_kind.is_none()
        {
            app.focus.by_widget_id(id);
            self.transient_focus_id = None;
        } else {
            app.focus.first();
        }
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);

        // Since messages are consumed, the recipient is assumed to be
        // the first component that is not None. If multiple components
        // require messages, cloning is required to avoid borrowing issues
        // but may lead to performance issues.
        match () {
            _ if self.modal_view.is_some() => {
                effects.append(&mut self.modal_view.as_mut().map(|c| c.0.handle_message(app, msg)).unwrap_or_default());
            }
            _ => {
                if self.content_view.is_some() {
                    effects.append(&mut self.content_view.as_mut().map(|c| c.handle_message(app, msg)).unwrap_or_default());
                }
            }
        };

        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(target) = self.modal_view.as_mut() {
            return target.0.handle_key_events(app, key);
        }

        if let Some(content) = self.content_view.as_mut() {
            return content.handle_key_events(app, key);
        }

        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if let Some(target) = self.modal_view.as_mut() {
            return target.0.handle_mouse_events(app, mouse);
        }

        self.content_view
            .as_mut()
            .map(|c| c.handle_mouse_events(app, mouse))
            .unwrap_or_default()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the theme's background color for consistency
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        if let Some(current) = self.content_view.as_mut() {
            current.render(frame, layout[0], app);
        }

        // The footer carries the latest status while one is active, hints otherwise.
        if let Some(entry) = app.status.active_entry() {
            let style = match entry.level {
                StatusLevel::Info => app.ctx.theme.status_info(),
                StatusLevel::Success => app.ctx.theme.status_success(),
                StatusLevel::Error => app.ctx.theme.status_error(),
            };
            let line = format!("{} {}", entry.at.format("%H:%M:%S"), entry.text);
            frame.render_widget(Paragraph::new(line).style(style), layout[1]);
        } else {
            let hint_spans: Vec<Span> = self.get_hint_spans(app);
            let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
            frame.render_widget(hints_widget, layout[1]);
        }

        if let Some((modal, position)) = self.modal_view.as_mut() {
            render_overlay(frame, app);
            let modal_area = position.0(area);
            frame.render_widget(Clear, modal_area);

            let modal_hints = modal.get_hint_spans(app);
            if !modal_hints.is_empty() {
                let splits = Layout::vertical([
                    Constraint::Percentage(100), // Modal body
                    Constraint::Length(1),       // Modal hints bar
                ])
                .split(modal_area);
                let hints_widget = Paragraph::new(Line::from(modal_hints))
                    .style(app.ctx.theme.text_muted_style())
                    .bg(app.ctx.theme.roles().background);
                frame.render_widget(hints_widget, splits[1]);
                modal.render(frame, splits[0], app);
            } else {
                modal.render(frame, modal_area, app);
            }
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];

        if let Some(content) = self.content_view.as_ref() {
            hint_spans.extend(content.get_hint_spans(app));
        }

        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        // Content fills the screen; a single footer line carries hints or
        // the active status message.
        let areas = Layout::vertical([
            Constraint::Percentage(100), // Main view
            Constraint::Min(1),          // Hints / status line
        ])
        .split(area);

        vec![areas[0], areas[1]]
    }
}

/// Renders the dimmed backdrop behind a modal.
fn render_overlay(frame: &mut Frame, app: &mut App) {
    frame.render_widget(Block::default().style(app.ctx.theme.modal_background_style()).dim(), frame.area());
}
