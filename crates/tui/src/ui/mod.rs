//! UI rendering module for the TUI application.
//!
//! This module provides all the user interface rendering functionality,
//! including the main layout, modals, components, and utilities.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
