use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use walletdeck_types::{Effect, WalletRecord};

/// Entries of the per-row actions menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMenuItem {
    CopyAddress,
    SendFromWallet,
}

impl RowMenuItem {
    pub const ALL: [RowMenuItem; 2] = [RowMenuItem::CopyAddress, RowMenuItem::SendFromWallet];

    pub fn label(&self) -> &'static str {
        match self {
            RowMenuItem::CopyAddress => "Copy Address",
            RowMenuItem::SendFromWallet => "Send From Wallet",
        }
    }
}

/// Resolve a menu activation into effects.
///
/// "Copy Address" puts the record's id on the clipboard, not its address.
/// The mapping is deliberate and must not be "fixed" in passing.
pub fn activate(menu: &RowMenuState, item: RowMenuItem) -> Vec<Effect> {
    match item {
        RowMenuItem::CopyAddress => vec![
            Effect::CloseModal,
            Effect::CopyToClipboardRequested(menu.record_id().to_string()),
        ],
        // Transfers are not wired up; the entry only dismisses the menu.
        RowMenuItem::SendFromWallet => vec![Effect::CloseModal],
    }
}

/// State for the per-row actions menu.
#[derive(Debug)]
pub struct RowMenuState {
    /// Id of the record the menu was opened for, doubling as the clipboard
    /// payload of "Copy Address".
    record_id: String,
    /// Address shown in the menu header.
    record_address: String,
    selected: usize,

    container_focus: FocusFlag,
    pub f_entries: FocusFlag,
}

impl Default for RowMenuState {
    fn default() -> Self {
        Self {
            record_id: String::new(),
            record_address: String::new(),
            selected: 0,
            container_focus: FocusFlag::named("row_menu"),
            f_entries: FocusFlag::named("row_menu.entries"),
        }
    }
}

impl RowMenuState {
    /// Point the menu at `record` and reset the cursor.
    pub fn open_for(&mut self, record: &WalletRecord) {
        self.record_id = record.id.clone();
        self.record_address = record.address.clone();
        self.set_selected(0);
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn record_address(&self) -> &str {
        &self.record_address
    }

    pub fn selected_item(&self) -> RowMenuItem {
        RowMenuItem::ALL[self.selected]
    }

    pub fn move_selection(&mut self, delta: isize) {
        let next = if delta >= 0 {
            self.selected.saturating_add(delta as usize)
        } else {
            self.selected.saturating_sub(delta.unsigned_abs())
        };
        self.set_selected(next);
    }

    pub fn set_selected(&mut self, index: usize) {
        self.selected = index.min(RowMenuItem::ALL.len() - 1);
    }
}

impl HasFocus for RowMenuState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_entries);
        builder.end(tag);
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

    fn record() -> WalletRecord {
        WalletRecord {
            id: "m5gr84i9".to_string(),
            balance: 316.0,
            address: "0x86e154587c5Bc5B783762151CA62d881b5e243E4".to_string(),
        }
    }

    #[test]
    fn copy_address_puts_the_record_id_on_the_clipboard() {
        let mut menu = RowMenuState::default();
        menu.open_for(&record());
        let effects = activate(&menu, RowMenuItem::CopyAddress);
        assert_eq!(
            effects,
            vec![
                Effect::CloseModal,
                Effect::CopyToClipboardRequested("m5gr84i9".to_string()),
            ]
        );
    }

    #[test]
    fn send_from_wallet_only_closes_the_menu() {
        let mut menu = RowMenuState::default();
        menu.open_for(&record());
        assert_eq!(activate(&menu, RowMenuItem::SendFromWallet), vec![Effect::CloseModal]);
    }

    #[test]
    fn cursor_stays_within_menu_bounds() {
        let mut menu = RowMenuState::default();
        menu.open_for(&record());
        menu.move_selection(-1);
        assert_eq!(menu.selected_item(), RowMenuItem::CopyAddress);
        menu.move_selection(1);
        menu.move_selection(1);
        assert_eq!(menu.selected_item(), RowMenuItem::SendFromWallet);
    }

    #[test]
    fn reopening_resets_the_cursor() {
        let mut menu = RowMenuState::default();
        menu.open_for(&record());
        menu.move_selection(1);
        menu.open_for(&record());
        assert_eq!(menu.selected_item(), RowMenuItem::CopyAddress);
    }
}
