// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Interactive dataset card table.
//!
//! This module provides the table showing the current page of dataset
//! records. It separates persistent state (`DatasetTableState`) from the
//! transient widget view (`DatasetTable`), which borrows the records of the
//! page being shown.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::DatasetRecord;

#[derive(Default)]
pub(crate) struct DatasetTableState {
    pub(crate) table_state: TableState,
}

impl DatasetTableState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Moves the selection to the first card of a page holding `len` records.
    pub(crate) fn select_first(&mut self, len: usize) {
        self.table_state.select((len > 0).then_some(0));
    }

    pub(crate) fn as_widget<'a>(&'a mut self, records: &'a [&'a DatasetRecord]) -> DatasetTable<'a> {
        DatasetTable {
            records,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct DatasetTable<'a> {
    records: &'a [&'a DatasetRecord],
    table_state: &'a mut TableState,
}

impl<'a> DatasetTable<'a> {
    pub(crate) fn selected_record(&self) -> Option<&'a DatasetRecord> {
        let index = self.table_state.selected()?;
        self.records.get(index).copied()
    }

    fn goto_next(&mut self) {
        let len = self.records.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.records.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        self.table_state.select((!self.records.is_empty()).then_some(0));
    }

    fn goto_last(&mut self) {
        self.table_state.select(self.records.len().checked_sub(1));
    }

    // The page can shrink under the selection when results are replaced.
    fn clamp_selection(&mut self) {
        match (self.table_state.selected(), self.records.len()) {
            (_, 0) => self.table_state.select(None),
            (Some(i), len) if i >= len => self.table_state.select(Some(len - 1)),
            (None, _) => self.table_state.select(Some(0)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record;

    #[test]
    fn navigation_wraps_around() {
        let records: Vec<DatasetRecord> = (1..=3).map(|i| record(i, "1 MB", None)).collect();
        let refs: Vec<&DatasetRecord> = records.iter().collect();

        let mut state = DatasetTableState::new();
        state.select_first(refs.len());
        let mut table = state.as_widget(&refs);

        table.goto_previous();
        assert_eq!(table.selected_record().map(|r| r.id), Some(3));
        table.goto_next();
        assert_eq!(table.selected_record().map(|r| r.id), Some(1));
        table.goto_last();
        assert_eq!(table.selected_record().map(|r| r.id), Some(3));
        table.goto_first();
        assert_eq!(table.selected_record().map(|r| r.id), Some(1));
    }

    #[test]
    fn selection_is_clamped_to_a_shorter_page() {
        let records: Vec<DatasetRecord> = (1..=2).map(|i| record(i, "1 MB", None)).collect();
        let refs: Vec<&DatasetRecord> = records.iter().collect();

        let mut state = DatasetTableState::new();
        state.table_state.select(Some(8));
        let mut table = state.as_widget(&refs);
        table.clamp_selection();
        assert_eq!(table.selected_record().map(|r| r.id), Some(2));

        let mut state = DatasetTableState::new();
        state.table_state.select(Some(1));
        let mut empty = state.as_widget(&[]);
        empty.clamp_selection();
        assert_eq!(empty.selected_record(), None);
    }
}
