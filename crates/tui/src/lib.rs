//! # Walletdeck TUI Library
//!
//! This library provides the terminal user interface for Walletdeck. It
//! implements an interactive wallet ledger viewer using the Ratatui framework
//! with keyboard and mouse navigation, themed widgets, and a message/effect
//! update loop.
//!
//! ## Key Features
//!
//! - Filterable, sortable wallet table with paging and row selection
//! - Per-row actions menu with clipboard integration
//! - Airdrop and wallet generation dialogs
//! - Focus management and keyboard navigation
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture where each UI element
//! (dashboard, row actions menu, dialogs, empty screen) is implemented as a
//! separate component that can handle events and render itself.

mod app;
mod cmd;
mod ui;

use anyhow::Result;
use walletdeck_types::WalletRecord;

pub use ui::theme::catalog as themes;

/// Runs the main TUI application loop.
///
/// This function initializes the terminal interface, builds the application
/// state from `records`, and runs the main event loop that handles user
/// input, effects, and UI rendering.
///
/// # Arguments
///
/// * `records` - The wallet records to display
/// * `preferred_theme` - Optional theme name supplied on the command line
///
/// # Returns
///
/// Returns `Ok(())` if the application exits cleanly, or an error if there's
/// a terminal setup or runtime issue.
///
/// # Errors
///
/// This function can return errors for:
/// - Terminal setup failures (raw mode, alternate screen)
/// - Event loop runtime errors
pub async fn run(records: Vec<WalletRecord>, preferred_theme: Option<&str>) -> Result<()> {
    ui::runtime::run_app(records, preferred_theme).await
}
