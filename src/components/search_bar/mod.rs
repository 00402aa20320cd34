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

//! Search box.
//!
//! A single line text input holding the query. Enter submits the current text
//! and leaves it in place, Esc hands focus back without submitting.

mod render;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchBarAction {
    Submit(String),
    Cancel,
}

#[derive(Default)]
pub(crate) struct SearchBar {
    input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.input = Input::new(value.to_string());
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchBarAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(SearchBarAction::Submit(self.input.value().to_string())),
            KeyCode::Esc => Some(SearchBarAction::Cancel),
            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typed_text_is_submitted_and_kept() {
        let mut bar = SearchBar::new();
        for c in "retail".chars() {
            assert_eq!(bar.process_event(&key(KeyCode::Char(c))), None);
        }
        bar.process_event(&key(KeyCode::Backspace));

        assert_eq!(
            bar.process_event(&key(KeyCode::Enter)),
            Some(SearchBarAction::Submit("retai".into()))
        );
        assert_eq!(bar.value(), "retai");
    }

    #[test]
    fn escape_cancels() {
        let mut bar = SearchBar::new();
        bar.set_value("sales");
        assert_eq!(bar.process_event(&key(KeyCode::Esc)), Some(SearchBarAction::Cancel));
        assert_eq!(bar.value(), "sales");
    }
}
