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

//! Search view state and its update function.
//!
//! All state behind the dataset listing lives in [`ViewState`] and changes
//! only through [`ViewState::reduce`]. Reducing an [`Action`] may yield an
//! [`Effect`], a request the caller must hand to the task worker.
//!
//! # Request sequencing
//!
//! Every catalog fetch and search is stamped with a request id taken from a
//! monotonically increasing counter. Responses carrying anything but the
//! latest id are discarded, so a slow earlier search can never overwrite the
//! results of a newer one.

pub(crate) mod pagination;
pub(crate) mod pipeline;

use tracing::debug;

use crate::{
    model::{DatasetRecord, SearchHistory, StarTier},
    state::pipeline::{PageView, SortSpec},
};

/// Maximum number of query results kept in the store.
pub(crate) const MAX_RESULTS: usize = 20;

#[derive(Debug)]
pub(crate) enum Action {
    LoadCatalog,
    CatalogLoaded {
        request_id: u64,
        datasets: Vec<DatasetRecord>,
    },

    Search(String),
    SearchSucceeded {
        request_id: u64,
        query: String,
        results: Vec<DatasetRecord>,
    },

    RequestFailed {
        request_id: u64,
        error: String,
    },

    SetRatingFilter(Option<StarTier>),
    CycleRatingFilter,
    ToggleSort(SortSpec),
    SetSort(Option<SortSpec>),

    GotoPage(usize),
    NextPage,
    PreviousPage,

    DismissError,
}

/// Work requested by the reducer, to be carried out off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    FetchCatalog { request_id: u64 },
    Query { request_id: u64, query: String },
}

#[derive(Debug)]
pub(crate) struct ViewState {
    pub(crate) datasets: Vec<DatasetRecord>,

    pub(crate) loading: bool,
    pub(crate) show_cta: bool,
    pub(crate) last_error: Option<String>,
    pub(crate) last_query: Option<String>,

    pub(crate) history: SearchHistory,

    pub(crate) rating_filter: Option<StarTier>,
    pub(crate) sort: Option<SortSpec>,
    pub(crate) current_page: usize,

    latest_request: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub(crate) fn new() -> Self {
        Self {
            datasets: vec![],
            loading: false,
            show_cta: false,
            last_error: None,
            last_query: None,
            history: SearchHistory::new(),
            rating_filter: None,
            sort: None,
            current_page: 1,
            latest_request: 0,
        }
    }

    /// Derives the page of records currently on screen.
    pub(crate) fn page(&self) -> PageView<'_> {
        pipeline::visible_page(&self.datasets, self.rating_filter, self.sort, self.current_page)
    }

    /// Applies an action to the state.
    ///
    /// Returns the effect the caller must run, if any. Only the request
    /// actions ([`Action::LoadCatalog`] and a non-empty [`Action::Search`])
    /// produce effects.
    pub(crate) fn reduce(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::LoadCatalog => {
                let request_id = self.begin_request();
                Some(Effect::FetchCatalog { request_id })
            }

            Action::CatalogLoaded {
                request_id,
                datasets,
            } => {
                if self.is_latest(request_id) {
                    self.datasets = datasets;
                    self.loading = false;
                    self.current_page = 1;
                }
                None
            }

            Action::Search(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return None;
                }

                let request_id = self.begin_request();
                Some(Effect::Query {
                    request_id,
                    query: query.to_string(),
                })
            }

            Action::SearchSucceeded {
                request_id,
                query,
                mut results,
            } => {
                if self.is_latest(request_id) {
                    results.truncate(MAX_RESULTS);
                    self.datasets = results;
                    self.history.push(&query);
                    self.last_query = Some(query);
                    self.loading = false;
                    self.show_cta = true;
                    self.current_page = 1;
                }
                None
            }

            Action::RequestFailed { request_id, error } => {
                if self.is_latest(request_id) {
                    self.loading = false;
                    self.last_error = Some(error);
                }
                None
            }

            Action::SetRatingFilter(filter) => {
                self.rating_filter = filter;
                self.current_page = 1;
                None
            }

            Action::CycleRatingFilter => {
                self.rating_filter = next_rating_filter(self.rating_filter);
                self.current_page = 1;
                None
            }

            Action::ToggleSort(spec) => {
                self.sort = pipeline::toggle_sort(self.sort, spec);
                None
            }

            Action::SetSort(sort) => {
                self.sort = sort;
                None
            }

            Action::GotoPage(page) => {
                if page >= 1 && page <= self.page().total_pages {
                    self.current_page = page;
                }
                None
            }

            Action::NextPage => {
                if pagination::has_next(self.current_page, self.page().total_pages) {
                    self.current_page += 1;
                }
                None
            }

            Action::PreviousPage => {
                if pagination::has_previous(self.current_page) {
                    self.current_page -= 1;
                }
                None
            }

            Action::DismissError => {
                self.last_error = None;
                None
            }
        }
    }

    fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.last_error = None;
        self.latest_request
    }

    fn is_latest(&self, request_id: u64) -> bool {
        let latest = request_id == self.latest_request;
        if !latest {
            debug!(request_id, latest = self.latest_request, "Discarding stale response");
        }
        latest
    }
}

// None -> 5 -> 4 -> 3 -> 2 -> 1 -> None
fn next_rating_filter(current: Option<StarTier>) -> Option<StarTier> {
    match current {
        None => StarTier::DESCENDING.first().copied(),
        Some(tier) => StarTier::DESCENDING
            .iter()
            .skip_while(|t| **t != tier)
            .nth(1)
            .copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record;

    fn query_id(effect: Option<Effect>) -> u64 {
        match effect {
            Some(Effect::Query { request_id, .. }) => request_id,
            other => panic!("expected a query effect, got {other:?}"),
        }
    }

    fn results(count: i64) -> Vec<DatasetRecord> {
        (1..=count).map(|i| record(i, "1 MB", Some(0.7))).collect()
    }

    #[test]
    fn empty_search_is_a_no_op() {
        let mut state = ViewState::new();
        assert_eq!(state.reduce(Action::Search("   ".into())), None);
        assert!(!state.loading);
    }

    #[test]
    fn search_sets_loading_and_clears_error() {
        let mut state = ViewState::new();
        state.last_error = Some("boom".into());

        let effect = state.reduce(Action::Search(" sales data ".into()));
        assert_eq!(
            effect,
            Some(Effect::Query {
                request_id: 1,
                query: "sales data".into()
            })
        );
        assert!(state.loading);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn successful_search_truncates_and_records_history() {
        let mut state = ViewState::new();
        let id = query_id(state.reduce(Action::Search("sales".into())));

        state.reduce(Action::SearchSucceeded {
            request_id: id,
            query: "sales".into(),
            results: results(35),
        });

        assert_eq!(state.datasets.len(), MAX_RESULTS);
        assert_eq!(state.history.entries(), ["sales"]);
        assert_eq!(state.last_query.as_deref(), Some("sales"));
        assert!(!state.loading);
        assert!(state.show_cta);
    }

    #[test]
    fn successful_search_resets_to_the_first_page() {
        let mut state = ViewState::new();
        state.datasets = results(20);
        state.reduce(Action::GotoPage(2));
        assert_eq!(state.current_page, 2);

        let id = query_id(state.reduce(Action::Search("reviews".into())));
        state.reduce(Action::SearchSucceeded {
            request_id: id,
            query: "reviews".into(),
            results: results(12),
        });
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn only_the_latest_response_updates_the_store() {
        let mut state = ViewState::new();
        let first = query_id(state.reduce(Action::Search("first".into())));
        let second = query_id(state.reduce(Action::Search("second".into())));
        assert!(second > first);

        state.reduce(Action::SearchSucceeded {
            request_id: second,
            query: "second".into(),
            results: results(2),
        });
        state.reduce(Action::SearchSucceeded {
            request_id: first,
            query: "first".into(),
            results: results(9),
        });

        assert_eq!(state.datasets.len(), 2);
        assert_eq!(state.history.entries(), ["second"]);
        assert_eq!(state.last_query.as_deref(), Some("second"));
    }

    #[test]
    fn stale_response_keeps_loading_until_latest_arrives() {
        let mut state = ViewState::new();
        let first = query_id(state.reduce(Action::Search("first".into())));
        let _second = query_id(state.reduce(Action::Search("second".into())));

        state.reduce(Action::SearchSucceeded {
            request_id: first,
            query: "first".into(),
            results: results(3),
        });

        assert!(state.loading);
        assert!(state.datasets.is_empty());
        assert!(state.history.is_empty());
    }

    #[test]
    fn catalog_is_dropped_once_a_search_supersedes_it() {
        let mut state = ViewState::new();
        let catalog_id = match state.reduce(Action::LoadCatalog) {
            Some(Effect::FetchCatalog { request_id }) => request_id,
            other => panic!("expected a catalog effect, got {other:?}"),
        };
        let search_id = query_id(state.reduce(Action::Search("sales".into())));

        state.reduce(Action::SearchSucceeded {
            request_id: search_id,
            query: "sales".into(),
            results: results(4),
        });
        state.reduce(Action::CatalogLoaded {
            request_id: catalog_id,
            datasets: results(25),
        });

        assert_eq!(state.datasets.len(), 4);
    }

    #[test]
    fn catalog_is_not_truncated() {
        let mut state = ViewState::new();
        let Some(Effect::FetchCatalog { request_id }) = state.reduce(Action::LoadCatalog) else {
            panic!("expected a catalog effect");
        };

        state.reduce(Action::CatalogLoaded {
            request_id,
            datasets: results(25),
        });

        assert_eq!(state.datasets.len(), 25);
        assert!(!state.loading);
        assert!(!state.show_cta);
        assert_eq!(state.page().total_pages, 3);
    }

    #[test]
    fn failure_keeps_prior_results_and_reports_error() {
        let mut state = ViewState::new();
        state.datasets = results(3);

        let id = query_id(state.reduce(Action::Search("sales".into())));
        state.reduce(Action::RequestFailed {
            request_id: id,
            error: "connection refused".into(),
        });

        assert!(!state.loading);
        assert_eq!(state.datasets.len(), 3);
        assert_eq!(state.last_error.as_deref(), Some("connection refused"));
        assert!(state.history.is_empty());

        state.reduce(Action::DismissError);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut state = ViewState::new();
        let first = query_id(state.reduce(Action::Search("first".into())));
        let _second = query_id(state.reduce(Action::Search("second".into())));

        state.reduce(Action::RequestFailed {
            request_id: first,
            error: "timeout".into(),
        });

        assert!(state.loading);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn rating_filter_cycles_through_every_tier() {
        let mut state = ViewState::new();
        let mut seen = vec![];
        for _ in 0..6 {
            state.reduce(Action::CycleRatingFilter);
            seen.push(state.rating_filter);
        }

        assert_eq!(
            seen,
            vec![
                Some(StarTier::Five),
                Some(StarTier::Four),
                Some(StarTier::Three),
                Some(StarTier::Two),
                Some(StarTier::One),
                None,
            ]
        );
    }

    #[test]
    fn filter_change_returns_to_the_first_page() {
        let mut state = ViewState::new();
        state.datasets = results(20);
        state.reduce(Action::NextPage);
        assert_eq!(state.current_page, 2);

        state.reduce(Action::SetRatingFilter(Some(StarTier::Five)));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.rating_filter, Some(StarTier::Five));
    }

    #[test]
    fn toggling_sort_twice_clears_it() {
        let mut state = ViewState::new();
        state.reduce(Action::ToggleSort(SortSpec::SIZE_DESCENDING));
        assert_eq!(state.sort, Some(SortSpec::SIZE_DESCENDING));
        state.reduce(Action::ToggleSort(SortSpec::SIZE_DESCENDING));
        assert_eq!(state.sort, None);
    }

    #[test]
    fn page_navigation_is_bounded() {
        let mut state = ViewState::new();
        state.datasets = results(20);

        state.reduce(Action::PreviousPage);
        assert_eq!(state.current_page, 1);

        state.reduce(Action::NextPage);
        state.reduce(Action::NextPage);
        assert_eq!(state.current_page, 2);

        state.reduce(Action::GotoPage(3));
        assert_eq!(state.current_page, 2);
        state.reduce(Action::GotoPage(0));
        assert_eq!(state.current_page, 2);
        state.reduce(Action::GotoPage(1));
        assert_eq!(state.current_page, 1);
    }
}
