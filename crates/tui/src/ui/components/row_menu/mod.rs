mod row_menu_component;
mod state;

pub use row_menu_component::RowMenuComponent;
pub use state::{RowMenuItem, RowMenuState};
