//! Shared types for the walletdeck TUI.
//!
//! Holds the wallet record shape, the table column and sort descriptors,
//! and the message/effect enums that flow between the UI components and
//! the runtime.

pub mod dataset;

use serde::{Deserialize, Serialize};

/// A single wallet row in the dashboard dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRecord {
    /// Opaque record identifier. This is also the clipboard payload for
    /// the Copy Address action.
    pub id: String,
    /// Current balance in USD
    pub balance: f64,
    /// Hex-encoded wallet address
    pub address: String,
}

/// Columns of the wallet table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Address,
    Balance,
    Actions,
}

impl ColumnId {
    /// Whether the column may be hidden from the table. The actions
    /// column always stays visible.
    pub fn hideable(self) -> bool {
        !matches!(self, ColumnId::Actions)
    }
}

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A single column sort with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: ColumnId,
    pub direction: SortDirection,
}

/// Messages that drive shared state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic timer used for status expiry and render pacing
    Tick,
    /// Terminal was resized to the given columns and rows
    Resize(u16, u16),
}

/// Modal dialogs that can be layered over the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Per-row actions menu
    RowActions,
    /// Airdrop amount dialog
    Airdrop,
    /// Wallet generation quantity dialog
    GenerateWallets,
}

/// Side effects returned by update and event handlers for the runtime to
/// execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the given modal over the current screen
    ShowModal(Modal),
    /// Close the currently open modal
    CloseModal,
    /// Write the given text to the system clipboard
    CopyToClipboardRequested(String),
    /// Exit the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_record_parses_from_json() {
        let raw = r#"{"id":"m5gr84i9","balance":316,"address":"0x86e154587c5Bc5B783762151CA62d881b5e243E4"}"#;
        let record: WalletRecord = serde_json::from_str(raw).expect("record should deserialize");
        assert_eq!(record.id, "m5gr84i9");
        assert_eq!(record.balance, 316.0);
        assert!(record.address.starts_with("0x"));
    }

    #[test]
    fn wallet_record_roundtrips_balance_fractions() {
        let record = WalletRecord {
            id: "abc".to_string(),
            balance: 12.5,
            address: "0x0".to_string(),
        };
        let raw = serde_json::to_string(&record).expect("record should serialize");
        let parsed: WalletRecord = serde_json::from_str(&raw).expect("record should parse back");
        assert_eq!(parsed, record);
    }

    #[test]
    fn sort_direction_toggles_between_orders() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
    }

    #[test]
    fn actions_column_is_not_hideable() {
        assert!(ColumnId::Address.hideable());
        assert!(ColumnId::Balance.hideable());
        assert!(!ColumnId::Actions.hideable());
    }
}
