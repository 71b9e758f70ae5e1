mod amount_dialog_component;
mod state;

pub use amount_dialog_component::AmountDialogComponent;
pub use state::{AmountDialogState, DialogKind};
