use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// State for the screen shown when the dataset has no wallets.
#[derive(Debug)]
pub struct EmptyWalletsState {
    container_focus: FocusFlag,
    pub f_generate: FocusFlag,
}

impl Default for EmptyWalletsState {
    fn default() -> Self {
        Self {
            container_focus: FocusFlag::named("empty"),
            f_generate: FocusFlag::named("empty.generate"),
        }
    }
}

impl HasFocus for EmptyWalletsState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_generate);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
