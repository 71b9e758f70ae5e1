mod empty_state_component;
mod state;

pub use empty_state_component::EmptyStateComponent;
pub use state::EmptyWalletsState;
