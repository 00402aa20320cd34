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

//! Recent and popular searches sidebar.
//!
//! The sidebar lists recent searches followed by the configured popular
//! searches as one selectable sequence. Activating an entry yields its query
//! so the caller can run it again.

mod render;

use crossterm::event::{Event, KeyCode};
use ratatui::widgets::ListState;

use crate::model::SearchHistory;

pub(crate) struct Sidebar {
    list_state: ListState,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }
}

impl Sidebar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        history: &SearchHistory,
        popular: &[String],
    ) -> Option<String> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let len = history.len() + popular.len();
        if len == 0 {
            return None;
        }

        let selected = self.list_state.selected().unwrap_or(0).min(len - 1);

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.list_state.select(Some((selected + 1) % len));
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.list_state.select(Some(if selected == 0 { len - 1 } else { selected - 1 }));
                None
            }
            KeyCode::Enter => {
                self.list_state.select(Some(selected));
                entry(selected, history, popular).map(str::to_string)
            }
            _ => None,
        }
    }
}

fn entry<'a>(index: usize, history: &'a SearchHistory, popular: &'a [String]) -> Option<&'a str> {
    match history.get(index) {
        Some(query) => Some(query),
        None => popular.get(index - history.len()).map(String::as_str),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn popular() -> Vec<String> {
        vec!["Sales Data".to_string(), "Customer Reviews".to_string()]
    }

    #[test]
    fn entries_run_recent_then_popular() {
        let mut history = SearchHistory::new();
        history.push("churn");

        let mut sidebar = Sidebar::new();
        assert_eq!(sidebar.process_event(&key(KeyCode::Enter), &history, &popular()).as_deref(), Some("churn"));

        sidebar.process_event(&key(KeyCode::Down), &history, &popular());
        sidebar.process_event(&key(KeyCode::Down), &history, &popular());
        assert_eq!(
            sidebar.process_event(&key(KeyCode::Enter), &history, &popular()).as_deref(),
            Some("Customer Reviews")
        );

        sidebar.process_event(&key(KeyCode::Down), &history, &popular());
        assert_eq!(sidebar.process_event(&key(KeyCode::Enter), &history, &popular()).as_deref(), Some("churn"));
    }

    #[test]
    fn empty_sidebar_yields_nothing() {
        let mut sidebar = Sidebar::new();
        assert_eq!(sidebar.process_event(&key(KeyCode::Enter), &SearchHistory::new(), &[]), None);
    }
}
