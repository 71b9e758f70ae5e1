use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::TextInputState;

/// Which flavor of the amount dialog is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Airdrop,
    GenerateWallets,
}

/// Static copy for one dialog flavor.
#[derive(Debug, Clone, Copy)]
pub struct AmountDialogCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub field_label: &'static str,
    pub submit_label: &'static str,
}

impl DialogKind {
    pub fn copy(self) -> AmountDialogCopy {
        match self {
            DialogKind::Airdrop => AmountDialogCopy {
                title: "Airdrop wallets",
                description: "send token from main wallet to other wallet",
                field_label: "Amount",
                submit_label: "Send",
            },
            DialogKind::GenerateWallets => AmountDialogCopy {
                title: "Create Wallet",
                description: "Generate the number of Wallet you want",
                field_label: "Quantity",
                submit_label: "Generate",
            },
        }
    }
}

/// True when `c` may be typed into the amount field. The field holds ASCII
/// digits and at most one decimal point.
pub fn allow_amount_char(input: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '.' && !input.contains('.'))
}

/// State shared by the airdrop and generate dialogs.
#[derive(Debug)]
pub struct AmountDialogState {
    kind: DialogKind,
    pub amount: TextInputState,

    container_focus: FocusFlag,
    pub f_amount: FocusFlag,
    pub f_submit: FocusFlag,
}

impl AmountDialogState {
    pub fn new(kind: DialogKind) -> Self {
        let prefix = match kind {
            DialogKind::Airdrop => "airdrop",
            DialogKind::GenerateWallets => "generate",
        };
        Self {
            kind,
            amount: TextInputState::new(),
            container_focus: FocusFlag::named(prefix),
            f_amount: FocusFlag::named(&format!("{prefix}.amount")),
            f_submit: FocusFlag::named(&format!("{prefix}.submit")),
        }
    }

    pub fn copy(&self) -> AmountDialogCopy {
        self.kind.copy()
    }

    /// Clear the field for a fresh open.
    pub fn reset(&mut self) {
        self.amount.clear();
    }

    /// Insert `c` if the amount field accepts it.
    pub fn insert_char(&mut self, c: char) {
        if allow_amount_char(self.amount.input(), c) {
            self.amount.insert_char(c);
        }
    }
}

impl HasFocus for AmountDialogState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_amount);
        builder.leaf_widget(&self.f_submit);
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

    #[test]
    fn amount_field_accepts_digits_and_one_decimal_point() {
        let mut dialog = AmountDialogState::new(DialogKind::Airdrop);
        for c in "12.5".chars() {
            dialog.insert_char(c);
        }
        assert_eq!(dialog.amount.input(), "12.5");

        dialog.insert_char('.');
        dialog.insert_char('x');
        dialog.insert_char('-');
        assert_eq!(dialog.amount.input(), "12.5");
    }

    #[test]
    fn reopening_clears_the_previous_amount() {
        let mut dialog = AmountDialogState::new(DialogKind::GenerateWallets);
        dialog.insert_char('7');
        dialog.reset();
        assert!(dialog.amount.is_empty());
    }

    #[test]
    fn dialog_copy_matches_its_kind() {
        assert_eq!(DialogKind::Airdrop.copy().submit_label, "Send");
        assert_eq!(DialogKind::GenerateWallets.copy().submit_label, "Generate");
        assert_eq!(DialogKind::GenerateWallets.copy().title, "Create Wallet");
    }
}
