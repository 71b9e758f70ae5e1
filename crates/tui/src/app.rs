//! Application state for the wallet dashboard.
//!
//! This module contains the central state container for the TUI: the wallet
//! table, the modal states, and the footer status line. Components receive
//! `&mut App` and keep their view state here.

use std::rc::Rc;

use chrono::{DateTime, Local, TimeDelta};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;
use walletdeck_types::{Effect, Modal, Msg, WalletRecord};

use crate::ui::components::amount_dialog::{AmountDialogState, DialogKind};
use crate::ui::components::dashboard::DashboardState;
use crate::ui::components::empty_state::EmptyWalletsState;
use crate::ui::components::row_menu::RowMenuState;
use crate::ui::theme::{self, Theme};

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the active theme. This avoids threading
/// multiple references through components and helps reduce borrow complexity.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active color theme
    pub theme: Box<dyn Theme>,
    /// Catalog id of the active theme
    pub theme_id: &'static str,
}

impl SharedCtx {
    pub fn new(preferred_theme: Option<&str>) -> Self {
        let loaded = theme::load(preferred_theme);
        Self {
            theme: loaded.theme,
            theme_id: loaded.definition.id,
        }
    }
}

/// Severity of a footer status entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct StatusEntry {
    pub at: DateTime<Local>,
    pub level: StatusLevel,
    pub text: String,
}

/// Timestamped status messages surfaced in the footer line.
#[derive(Debug, Default)]
pub struct StatusState {
    entries: Vec<StatusEntry>,
}

/// Upper bound on retained entries.
const STATUS_CAPACITY: usize = 50;

impl StatusState {
    pub fn push(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.entries.push(StatusEntry {
            at: Local::now(),
            level,
            text: text.into(),
        });
        if self.entries.len() > STATUS_CAPACITY {
            let excess = self.entries.len() - STATUS_CAPACITY;
            self.entries.drain(..excess);
        }
    }

    /// Drop entries past the visibility window.
    pub fn prune_expired(&mut self) {
        let now = Local::now();
        self.entries
            .retain(|entry| now.signed_duration_since(entry.at) < TimeDelta::seconds(4));
    }

    /// Latest entry still inside the visibility window.
    pub fn active_entry(&self) -> Option<&StatusEntry> {
        self.entries.last()
    }

    /// True while a status is on screen; drives the fast tick cadence.
    pub fn has_active_entry(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// The main application state containing all UI data.
pub struct App {
    /// Shared, cross-cutting context (theme, config)
    pub ctx: SharedCtx,
    /// Wallet table state: filter, sort, paging, row selection
    pub dashboard: DashboardState,
    /// Per-row actions menu state
    pub row_menu: RowMenuState,
    /// Airdrop dialog state
    pub airdrop: AmountDialogState,
    /// Wallet generation dialog state
    pub generate: AmountDialogState,
    /// Screen shown when the dataset is empty
    pub empty_screen: EmptyWalletsState,
    /// Footer status messages
    pub status: StatusState,
    /// Which modal is open, if any
    pub open_modal_kind: Option<Modal>,
    /// Focus cycle, rebuilt before each render
    pub focus: Rc<Focus>,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(records: Vec<WalletRecord>, preferred_theme: Option<&str>) -> Self {
        let ctx = SharedCtx::new(preferred_theme);
        let record_count = records.len();
        let mut app = Self {
            ctx,
            dashboard: DashboardState::new(records),
            row_menu: RowMenuState::default(),
            airdrop: AmountDialogState::new(DialogKind::Airdrop),
            generate: AmountDialogState::new(DialogKind::GenerateWallets),
            empty_screen: EmptyWalletsState::default(),
            status: StatusState::default(),
            open_modal_kind: None,
            focus: Rc::new(Focus::default()),
            container_focus: FocusFlag::named("app"),
        };
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        debug!(theme = app.ctx.theme_id, records = record_count, "application state initialized");
        app.status
            .push(StatusLevel::Info, format!("Loaded {record_count} wallet records."));
        app
    }

    /// Reducer for messages that are not component-specific.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.status.prune_expired();
            }
            Msg::Resize(_, _) => {
                // Ratatui reflows on the next draw; nothing to recompute here.
            }
        }
        Vec::new()
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        // An open modal traps the focus cycle.
        match self.open_modal_kind {
            Some(Modal::RowActions) => {
                builder.widget(&self.row_menu);
            }
            Some(Modal::Airdrop) => {
                builder.widget(&self.airdrop);
            }
            Some(Modal::GenerateWallets) => {
                builder.widget(&self.generate);
            }
            None => {
                if self.dashboard.records().is_empty() {
                    builder.widget(&self.empty_screen);
                } else {
                    builder.widget(&self.dashboard);
                }
            }
        }
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<WalletRecord> {
        vec![WalletRecord {
            id: "m5gr84i9".to_string(),
            balance: 316.0,
            address: "0x86e154587c5Bc5B783762151CA62d881b5e243E4".to_string(),
        }]
    }

    #[test]
    fn status_entries_are_capped() {
        let mut status = StatusState::default();
        for i in 0..(STATUS_CAPACITY + 10) {
            status.push(StatusLevel::Info, format!("entry {i}"));
        }
        assert!(status.has_active_entry());
        assert_eq!(status.active_entry().map(|e| e.text.as_str()), Some("entry 59"));
    }

    #[test]
    fn dashboard_focus_cycle_covers_filter_table_and_airdrop() {
        let app = App::new(sample_records(), Some("ansi256"));
        app.focus.first();
        assert!(app.dashboard.f_filter.get());
        app.focus.next();
        assert!(app.dashboard.f_table.get());
        app.focus.next();
        assert!(app.dashboard.f_airdrop.get());
        app.focus.next();
        assert!(app.dashboard.f_filter.get());
    }

    #[test]
    fn open_modal_traps_the_focus_cycle() {
        let mut app = App::new(sample_records(), Some("ansi256"));
        app.open_modal_kind = Some(Modal::Airdrop);
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        app.focus.first();
        assert!(app.airdrop.f_amount.get());
        app.focus.next();
        assert!(app.airdrop.f_submit.get());
        app.focus.next();
        assert!(app.airdrop.f_amount.get());
    }
}
