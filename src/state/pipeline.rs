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

//! View transform pipeline.
//!
//! Derives the visible page of dataset records from the store by applying, in
//! order, the rating filter, the sort order and the pagination slice. The
//! pipeline works on references and never reorders the store itself.

use std::{cmp::Ordering, fmt};

use crate::{
    model::{DatasetRecord, StarTier},
    state::pagination::{self, PAGE_SIZE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortField {
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortSpec {
    pub(crate) field: SortField,
    pub(crate) order: SortOrder,
}

impl SortSpec {
    pub(crate) const SIZE_ASCENDING: SortSpec = SortSpec {
        field: SortField::Size,
        order: SortOrder::Ascending,
    };

    pub(crate) const SIZE_DESCENDING: SortSpec = SortSpec {
        field: SortField::Size,
        order: SortOrder::Descending,
    };

    fn compare(&self, a: &DatasetRecord, b: &DatasetRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Size => compare_sizes(a.size_in_mb(), b.size_in_mb()),
        };

        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Size => "size",
        };
        let order = match self.order {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        };
        write!(f, "{field} {order}")
    }
}

// Unparseable sizes order before every parsed size.
fn compare_sizes(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Toggles a sort choice: selecting the active pair again clears the sort,
/// selecting any other pair replaces it.
pub(crate) fn toggle_sort(current: Option<SortSpec>, requested: SortSpec) -> Option<SortSpec> {
    if current == Some(requested) {
        None
    } else {
        Some(requested)
    }
}

/// The page of records to display and the totals needed by the pagination
/// bar.
#[derive(Debug)]
pub(crate) struct PageView<'a> {
    pub(crate) records: Vec<&'a DatasetRecord>,
    pub(crate) total_records: usize,
    pub(crate) total_pages: usize,
}

/// Runs the filter, sort and paginate stages over the store.
///
/// # Arguments
///
/// * `datasets` - The canonical store, left untouched.
/// * `filter` - When set, only records rated with exactly this tier remain.
///   Unscored records never match.
/// * `sort` - When set, a stable sort over the filtered records.
/// * `current_page` - The 1-based page to slice out.
pub(crate) fn visible_page<'a>(
    datasets: &'a [DatasetRecord],
    filter: Option<StarTier>,
    sort: Option<SortSpec>,
    current_page: usize,
) -> PageView<'a> {
    let mut records: Vec<&DatasetRecord> = datasets
        .iter()
        .filter(|record| filter.is_none_or(|tier| record.rating().tier() == Some(tier)))
        .collect();

    if let Some(spec) = sort {
        records.sort_by(|a, b| spec.compare(a, b));
    }

    let total_records = records.len();
    let total_pages = pagination::total_pages(total_records, PAGE_SIZE);

    let start = current_page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let records = records.into_iter().skip(start).take(PAGE_SIZE).collect();

    PageView {
        records,
        total_records,
        total_pages,
    }
}
