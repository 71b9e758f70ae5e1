use indexmap::IndexSet;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{layout::Rect, widgets::TableState};
use walletdeck_types::{ColumnId, SortDirection, SortKey, WalletRecord};

use crate::ui::components::common::TextInputState;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Compute the display order of `records` for the given view state.
///
/// The pipeline is fixed: the address filter runs first, then the sort. The
/// sort is stable, so records with equal addresses keep their dataset order.
/// Only the address column is sortable; any other key leaves dataset order.
pub fn visible_indices(records: &[WalletRecord], filter: &str, sort: Option<&SortKey>) -> Vec<usize> {
    let needle = filter.to_lowercase();
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| needle.is_empty() || record.address.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect();

    if let Some(key) = sort
        && key.column == ColumnId::Address
    {
        indices.sort_by(|&a, &b| {
            let ordering = records[a].address.to_lowercase().cmp(&records[b].address.to_lowercase());
            match key.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    indices
}

/// View state for the wallet table: filter, sort, paging, and row selection.
#[derive(Debug)]
pub struct DashboardState {
    records: Vec<WalletRecord>,
    /// Address substring filter.
    pub filter: TextInputState,
    /// Active sort; `None` shows dataset order.
    sort: Option<SortKey>,
    /// Indices into `records` in display order.
    visible: Vec<usize>,
    hidden_columns: IndexSet<ColumnId>,
    /// Ids of rows toggled with the selection key.
    selected_ids: IndexSet<String>,
    /// Cursor position within `visible`.
    selected: usize,
    page: usize,
    pub table_state: TableState,

    // rat-focus flags for panels
    container_focus: FocusFlag,
    pub f_filter: FocusFlag,
    pub f_table: FocusFlag,
    pub f_airdrop: FocusFlag,
}

impl DashboardState {
    pub fn new(records: Vec<WalletRecord>) -> Self {
        let mut state = Self {
            records,
            filter: TextInputState::new(),
            sort: None,
            visible: Vec::new(),
            hidden_columns: IndexSet::new(),
            selected_ids: IndexSet::new(),
            selected: 0,
            page: 0,
            table_state: TableState::default(),
            container_focus: FocusFlag::named("dashboard"),
            f_filter: FocusFlag::named("dashboard.filter"),
            f_table: FocusFlag::named("dashboard.table"),
            f_airdrop: FocusFlag::named("dashboard.airdrop"),
        };
        state.refresh_visible();
        state
    }

    // ========================
    // Filter & Sort
    // ========================

    /// Re-run the pipeline after a filter edit. The cursor returns to the
    /// first row so the result set is shown from its first page.
    pub fn filter_changed(&mut self) {
        self.selected = 0;
        self.refresh_visible();
    }

    pub fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// First activation sorts ascending; repeated activation flips direction.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        self.sort = match self.sort.take() {
            Some(key) if key.column == column => Some(SortKey {
                column,
                direction: key.direction.toggled(),
            }),
            _ => Some(SortKey {
                column,
                direction: SortDirection::Ascending,
            }),
        };
        self.selected = 0;
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        self.visible = visible_indices(&self.records, self.filter.input(), self.sort.as_ref());
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
        self.page = if self.visible.is_empty() { 0 } else { self.selected / PAGE_SIZE };
        self.sync_table_state();
    }

    // ========================
    // Rows & Cursor
    // ========================

    pub fn records(&self) -> &[WalletRecord] {
        &self.records
    }
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Visible indices belonging to the current page.
    pub fn page_indices(&self) -> &[usize] {
        let start = (self.page * PAGE_SIZE).min(self.visible.len());
        let end = ((self.page + 1) * PAGE_SIZE).min(self.visible.len());
        &self.visible[start..end]
    }

    pub fn selected_record(&self) -> Option<&WalletRecord> {
        self.visible.get(self.selected).map(|&index| &self.records[index])
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.selected = if delta >= 0 {
            self.selected.saturating_add(delta as usize).min(last)
        } else {
            self.selected.saturating_sub(delta.unsigned_abs())
        };
        self.page = self.selected / PAGE_SIZE;
        self.sync_table_state();
    }

    pub fn set_selected(&mut self, index: usize) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = index.min(self.visible.len() - 1);
        self.page = self.selected / PAGE_SIZE;
        self.sync_table_state();
    }

    pub fn select_first(&mut self) {
        self.set_selected(0);
    }
    pub fn select_last(&mut self) {
        self.set_selected(self.visible.len().saturating_sub(1));
    }

    fn sync_table_state(&mut self) {
        if self.page_indices().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(self.selected - self.page * PAGE_SIZE));
        }
    }

    // ========================
    // Paging
    // ========================

    pub fn page(&self) -> usize {
        self.page
    }
    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(PAGE_SIZE)
    }
    pub fn can_page_back(&self) -> bool {
        self.page > 0
    }
    pub fn can_page_forward(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// Flip to the previous page; the cursor lands on its first row.
    pub fn page_back(&mut self) {
        if self.can_page_back() {
            self.set_selected((self.page - 1) * PAGE_SIZE);
        }
    }

    /// Flip to the next page; the cursor lands on its first row.
    pub fn page_forward(&mut self) {
        if self.can_page_forward() {
            self.set_selected((self.page + 1) * PAGE_SIZE);
        }
    }

    /// Footer indicator, e.g. `Page 2 of 3`.
    pub fn page_info(&self) -> String {
        let pages = self.page_count();
        if pages == 0 {
            "No pages".to_string()
        } else {
            format!("Page {} of {}", self.page + 1, pages)
        }
    }

    // ========================
    // Row Selection & Columns
    // ========================

    /// Toggle the cursor row in the selection set.
    pub fn toggle_selected_row(&mut self) {
        if let Some(record) = self.selected_record() {
            let id = record.id.clone();
            if !self.selected_ids.shift_remove(&id) {
                self.selected_ids.insert(id);
            }
        }
    }

    pub fn is_row_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Footer summary counting only toggled rows that survive the filter.
    pub fn selection_summary(&self) -> String {
        let selected_visible = self
            .visible
            .iter()
            .filter(|&&index| self.selected_ids.contains(&self.records[index].id))
            .count();
        format!("{} of {} row(s) selected.", selected_visible, self.visible.len())
    }

    /// Hide or show a column. Hiding suppresses rendering only; filter and
    /// sort keep operating on the full record.
    pub fn toggle_column(&mut self, column: ColumnId) {
        if !column.hideable() {
            return;
        }
        if !self.hidden_columns.shift_remove(&column) {
            self.hidden_columns.insert(column);
        }
    }

    pub fn is_column_visible(&self, column: ColumnId) -> bool {
        !self.hidden_columns.contains(&column)
    }
}

impl HasFocus for DashboardState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_filter);
        builder.leaf_widget(&self.f_table);
        builder.leaf_widget(&self.f_airdrop);
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

    fn sample_records() -> Vec<WalletRecord> {
        [
            ("m5gr84i9", 316.0, "0xAAA111"),
            ("3u1reuv4", 242.0, "0xBBB222"),
            ("derv1ws0", 837.0, "0xaaa333"),
            ("5kma53ae", 874.0, "0xCCC444"),
            ("bhqecj4p", 721.0, "0xAAA111"),
        ]
        .into_iter()
        .map(|(id, balance, address)| WalletRecord {
            id: id.to_string(),
            balance,
            address: address.to_string(),
        })
        .collect()
    }

    fn many_records(count: usize) -> Vec<WalletRecord> {
        (0..count)
            .map(|i| WalletRecord {
                id: format!("id{i:03}"),
                balance: i as f64,
                address: format!("0xADDR{i:03}"),
            })
            .collect()
    }

    #[test]
    fn filter_matches_address_substring_case_insensitively() {
        let records = sample_records();
        assert_eq!(visible_indices(&records, "aaa", None), vec![0, 2, 4]);
        assert_eq!(visible_indices(&records, "0xBBB", None), vec![1]);
        assert_eq!(visible_indices(&records, "zzz", None), Vec::<usize>::new());
        assert_eq!(visible_indices(&records, "", None), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn sort_is_stable_and_case_insensitive() {
        let records = sample_records();
        let asc = SortKey {
            column: ColumnId::Address,
            direction: SortDirection::Ascending,
        };
        // Records 0 and 4 share an address; ascending keeps 0 before 4.
        assert_eq!(visible_indices(&records, "", Some(&asc)), vec![0, 4, 2, 1, 3]);

        let desc = SortKey {
            column: ColumnId::Address,
            direction: SortDirection::Descending,
        };
        assert_eq!(visible_indices(&records, "", Some(&desc)), vec![3, 1, 2, 0, 4]);
    }

    #[test]
    fn filter_runs_before_sort() {
        let records = sample_records();
        let desc = SortKey {
            column: ColumnId::Address,
            direction: SortDirection::Descending,
        };
        assert_eq!(visible_indices(&records, "aaa", Some(&desc)), vec![2, 0, 4]);
    }

    #[test]
    fn shared_address_substring_keeps_every_embedded_record() {
        let records = walletdeck_types::dataset::EMBEDDED_WALLETS.clone();
        assert_eq!(visible_indices(&records, "86E154", None), vec![0, 1, 2, 3, 4]);

        // The five embedded records share one address, so either sort
        // direction preserves dataset order.
        let desc = SortKey {
            column: ColumnId::Address,
            direction: SortDirection::Descending,
        };
        assert_eq!(visible_indices(&records, "0x", Some(&desc)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn non_address_sort_keys_leave_dataset_order() {
        let records = sample_records();
        let key = SortKey {
            column: ColumnId::Balance,
            direction: SortDirection::Ascending,
        };
        assert_eq!(visible_indices(&records, "", Some(&key)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn toggle_sort_cycles_ascending_then_descending() {
        let mut state = DashboardState::new(sample_records());
        assert!(state.sort().is_none());

        state.toggle_sort(ColumnId::Address);
        assert_eq!(state.sort().map(|k| k.direction), Some(SortDirection::Ascending));
        assert_eq!(state.visible(), &[0, 4, 2, 1, 3]);

        state.toggle_sort(ColumnId::Address);
        assert_eq!(state.sort().map(|k| k.direction), Some(SortDirection::Descending));
        assert_eq!(state.visible(), &[3, 1, 2, 0, 4]);
    }

    #[test]
    fn paging_windows_are_page_size_rows() {
        let mut state = DashboardState::new(many_records(25));
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.page_indices().len(), PAGE_SIZE);
        assert_eq!(state.page_info(), "Page 1 of 3");

        state.page_forward();
        assert_eq!(state.page(), 1);
        assert_eq!(state.selected(), PAGE_SIZE);

        state.select_last();
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_indices().len(), 5);
        assert_eq!(state.page_info(), "Page 3 of 3");
        assert!(!state.can_page_forward());

        state.page_back();
        assert_eq!(state.page(), 1);
        assert!(state.can_page_back());
    }

    #[test]
    fn filter_edit_returns_to_first_page() {
        let mut state = DashboardState::new(many_records(25));
        state.select_last();
        assert_eq!(state.page(), 2);

        state.filter.insert_char('2');
        state.filter_changed();
        assert_eq!(state.page(), 0);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn empty_filter_result_has_no_pages() {
        let mut state = DashboardState::new(sample_records());
        for c in "zzz".chars() {
            state.filter.insert_char(c);
        }
        state.filter_changed();
        assert!(state.visible().is_empty());
        assert!(state.page_indices().is_empty());
        assert_eq!(state.page_info(), "No pages");
        assert_eq!(state.selection_summary(), "0 of 0 row(s) selected.");
        assert_eq!(state.table_state.selected(), None);
    }

    #[test]
    fn selection_summary_counts_only_filtered_rows() {
        let mut state = DashboardState::new(sample_records());
        state.toggle_selected_row(); // toggles m5gr84i9 at the cursor
        assert_eq!(state.selection_summary(), "1 of 5 row(s) selected.");

        for c in "bbb".chars() {
            state.filter.insert_char(c);
        }
        state.filter_changed();
        assert_eq!(state.selection_summary(), "0 of 1 row(s) selected.");

        state.filter.clear();
        state.filter_changed();
        assert_eq!(state.selection_summary(), "1 of 5 row(s) selected.");
    }

    #[test]
    fn toggling_rows_is_symmetric() {
        let mut state = DashboardState::new(sample_records());
        state.toggle_selected_row();
        assert!(state.is_row_selected("m5gr84i9"));
        state.toggle_selected_row();
        assert!(!state.is_row_selected("m5gr84i9"));
    }

    #[test]
    fn actions_column_cannot_be_hidden() {
        let mut state = DashboardState::new(sample_records());
        state.toggle_column(ColumnId::Balance);
        assert!(!state.is_column_visible(ColumnId::Balance));
        state.toggle_column(ColumnId::Actions);
        assert!(state.is_column_visible(ColumnId::Actions));
        state.toggle_column(ColumnId::Balance);
        assert!(state.is_column_visible(ColumnId::Balance));
    }

    #[test]
    fn hidden_column_does_not_change_visible_rows() {
        let mut state = DashboardState::new(sample_records());
        let before = state.visible().to_vec();
        state.toggle_column(ColumnId::Balance);
        assert_eq!(state.visible(), &before[..]);
    }
}
