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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching a corresponding
//! application event when typing is finished and a command is submitted.
//!
//! # Commands
//!
//! * `q`: quit.
//! * `search <text>` (or `s <text>`): run a search.
//! * `sort size asc|desc`, `sort off`: choose the size ordering.
//! * `rating 1..5`, `rating off`: filter by star rating.
//! * `page <n>`: jump to a page.
//! * `refresh`: reload the full catalog.

use std::sync::mpsc::Sender;

use anyhow::{Result, bail};
use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::StarTier,
    state::{Action, pipeline::SortSpec},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
    pub(crate) message: Option<String>,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            message: None,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Feeds a terminal event to the command line, returning whether it was
    /// consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                self.message = None;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    if let Err(e) = self.run_command(&buffer, event_tx) {
                        self.message = Some(e.to_string());
                    }
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        debug!(command = buffer, "Running command");

        let event = parse_command(buffer)?;
        event_tx.send(event)?;

        Ok(())
    }
}

fn parse_command(buffer: &str) -> Result<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let action = match parts.as_slice() {
        ["q"] | ["quit"] => return Ok(AppEvent::ExitApplication),

        ["search" | "s", query_parts @ ..] if !query_parts.is_empty() => {
            Action::Search(query_parts.join(" "))
        }
        ["search" | "s"] => bail!("usage: search <text>"),

        ["sort", "size", "asc"] => Action::SetSort(Some(SortSpec::SIZE_ASCENDING)),
        ["sort", "size", "desc"] => Action::SetSort(Some(SortSpec::SIZE_DESCENDING)),
        ["sort", "off"] => Action::SetSort(None),
        ["sort", ..] => bail!("usage: sort size asc|desc, sort off"),

        ["rating", "off"] => Action::SetRatingFilter(None),
        ["rating", stars] => {
            let tier = stars
                .parse::<u8>()
                .ok()
                .and_then(StarTier::from_stars)
                .ok_or_else(|| anyhow::anyhow!("rating must be 1 to 5 or off"))?;
            Action::SetRatingFilter(Some(tier))
        }

        ["page", page] => {
            let page = page
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("not a page number: {page}"))?;
            Action::GotoPage(page)
        }

        ["refresh"] => Action::LoadCatalog,

        [cmd, ..] => bail!("unknown command: {cmd}"),

        [] => bail!("empty command"),
    };

    Ok(AppEvent::Dispatch(action))
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn dispatched(buffer: &str) -> Action {
        match parse_command(buffer).unwrap() {
            AppEvent::Dispatch(action) => action,
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn search_joins_the_remaining_words() {
        assert!(matches!(
            dispatched("search  online   retail"),
            Action::Search(q) if q == "online retail"
        ));
        assert!(matches!(dispatched("s churn"), Action::Search(q) if q == "churn"));
        assert!(parse_command("search").is_err());
    }

    #[test]
    fn sort_commands() {
        assert!(matches!(dispatched("sort size asc"), Action::SetSort(Some(s)) if s == SortSpec::SIZE_ASCENDING));
        assert!(matches!(dispatched("sort size desc"), Action::SetSort(Some(s)) if s == SortSpec::SIZE_DESCENDING));
        assert!(matches!(dispatched("sort off"), Action::SetSort(None)));
        assert!(parse_command("sort title asc").is_err());
    }

    #[test]
    fn rating_commands() {
        assert!(matches!(dispatched("rating 4"), Action::SetRatingFilter(Some(StarTier::Four))));
        assert!(matches!(dispatched("rating off"), Action::SetRatingFilter(None)));
        assert!(parse_command("rating 6").is_err());
        assert!(parse_command("rating lots").is_err());
    }

    #[test]
    fn page_refresh_and_quit() {
        assert!(matches!(dispatched("page 3"), Action::GotoPage(3)));
        assert!(parse_command("page x").is_err());
        assert!(matches!(dispatched("refresh"), Action::LoadCatalog));
        assert!(matches!(parse_command("q").unwrap(), AppEvent::ExitApplication));
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn failed_command_leaves_a_message() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx));
        assert!(commander.active());
        for c in "rating 9".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &event_tx);
        }
        commander.handle_event(&key(KeyCode::Enter), &event_tx);

        assert!(!commander.active());
        assert_eq!(commander.message.as_deref(), Some("rating must be 1 to 5 or off"));
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn inactive_commander_ignores_other_keys() {
        let (event_tx, _event_rx) = mpsc::channel();
        let mut commander = Commander::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert!(!commander.handle_event(&event, &event_tx));
    }
}
