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

//! Recent search history.
//!
//! Most recent query first, each query appearing at most once.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a query as the most recent search, removing any earlier
    /// occurrence of the same query.
    pub(crate) fn push(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let mut history = SearchHistory::new();
        history.push("sales");
        history.push("reviews");
        assert_eq!(history.entries(), ["reviews", "sales"]);
    }

    #[test]
    fn repeat_query_moves_to_front_without_duplicate() {
        let mut history = SearchHistory::new();
        history.push("sales");
        history.push("reviews");
        history.push("metadata");
        history.push("sales");

        assert_eq!(history.entries(), ["sales", "metadata", "reviews"]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0), Some("sales"));
        assert_eq!(history.get(3), None);
    }
}
