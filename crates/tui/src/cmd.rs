//! # Command Execution Layer
//!
//! This module translates high-level application effects (`Effect`) into
//! imperative commands (`Cmd`) and executes them. It is the boundary where
//! the pure state management of the app meets side effects such as writing
//! to the system clipboard.
//!
//! State updates stay pure; commands carry the imperative work.

use tracing::warn;
use walletdeck_types::Effect;

use crate::app::{self, StatusLevel};

/// Side-effectful system commands executed outside of pure state updates.
#[derive(Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ClipboardSet(String),
}

/// Convert application [`Effect`]s into [`Cmd`] instances.
///
/// Effects describe what should happen; commands describe how. Navigation
/// effects are consumed by the main view and never reach this layer.
pub fn from_effects(effects: &[Effect]) -> Vec<Cmd> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::CopyToClipboardRequested(text) => Some(Cmd::ClipboardSet(text.clone())),
            _ => None,
        })
        .collect()
}

/// Execute a sequence of commands, surfacing outcomes in the status line.
pub fn run_cmds(app: &mut app::App, commands: Vec<Cmd>) {
    for command in commands {
        match command {
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text),
        }
    }
}

fn execute_clipboard_set(app: &mut app::App, text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => {
            app.status
                .push(StatusLevel::Success, format!("Copied {text} to clipboard"));
        }
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            app.status.push(StatusLevel::Error, format!("Clipboard error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walletdeck_types::Modal;

    #[test]
    fn only_clipboard_effects_become_commands() {
        let effects = vec![
            Effect::ShowModal(Modal::Airdrop),
            Effect::CopyToClipboardRequested("m5gr84i9".to_string()),
            Effect::CloseModal,
            Effect::Quit,
        ];
        assert_eq!(
            from_effects(&effects),
            vec![Cmd::ClipboardSet("m5gr84i9".to_string())]
        );
    }

    #[test]
    fn close_and_quit_produce_no_commands() {
        assert!(from_effects(&[Effect::CloseModal, Effect::Quit]).is_empty());
    }
}
