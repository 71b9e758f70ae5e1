//! Component system for the Walletdeck TUI.
//!
//! This module defines the Component trait that enables modular UI
//! development. Components are self-contained UI elements that handle their
//! own events and rendering while integrating with the main application
//! through a consistent interface.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;
use walletdeck_types::{Effect, Msg};

/// A trait representing a UI component with its own behavior.
///
/// Components handle localized events, update state held on [`App`], and
/// render themselves into a provided `Rect`, reporting side effects back to
/// the runtime via [`Effect`]s.
///
/// # Component Lifecycle
///
/// 1. **Messages**: `handle_message()` receives application-level messages
/// 2. **Input**: `handle_key_events()` and `handle_mouse_events()` receive
///    terminal input while the component is active
/// 3. **Rendering**: `render()` draws the component into the provided area
pub trait Component: std::fmt::Debug {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement. State changes belong in the event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints rendered in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Compute the layout areas this component renders into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
