//! UI components: dashboard, row actions menu, amount dialogs, empty screen.

pub mod amount_dialog;
pub mod common;
pub mod component;
pub mod dashboard;
pub mod empty_state;
pub mod row_menu;

pub use amount_dialog::AmountDialogComponent;
pub use component::*;
pub use dashboard::DashboardComponent;
pub use empty_state::EmptyStateComponent;
pub use row_menu::RowMenuComponent;
