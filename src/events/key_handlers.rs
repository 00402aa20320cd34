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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App,
    components::SearchBarAction,
    events::{AppEvent, Focus, dispatch},
    state::{Action, pipeline::SortSpec},
};

/// Maps keyboard input to view state actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. Input goes first to
/// the command line when it is open, then to the search box when it has
/// focus, and otherwise to the global bindings and the focused panel:
///
/// * **Application Control**: quitting, moving focus between panels.
/// * **Result Controls**: sorting by size, cycling the rating filter.
/// * **Pagination**: previous and next page.
/// * **Navigation**: moving the selection in the results or the sidebar.
///
/// # Errors
///
/// Returns an error if an event or task fails to send.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    // ':' is ordinary text while the search box has focus.
    if app.focus != Focus::SearchInput && app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if app.focus == Focus::SearchInput {
        if let Some(action) = app.search_bar.process_event(&event) {
            match action {
                SearchBarAction::Submit(query) => {
                    app.focus = Focus::Results;
                    dispatch(app, Action::Search(query))?;
                }
                SearchBarAction::Cancel => app.focus = Focus::Results,
            }
        }
        return Ok(());
    }

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    match app.focus {
        Focus::Results => {
            let page = app.state.page();
            app.dataset_table.as_widget(&page.records).process_event(&event);
        }
        Focus::Sidebar => {
            if let Some(query) =
                app.sidebar
                    .process_event(&event, &app.state.history, &app.config.popular_searches)
            {
                dispatch(app, Action::Search(query))?;
            }
        }
        Focus::SearchInput => {}
    }

    Ok(())
}

/// Handles bindings that apply whichever panel has focus, returning whether
/// the key was consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') => app.focus = Focus::SearchInput,
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Results => Focus::Sidebar,
                _ => Focus::Results,
            }
        }

        KeyCode::Char('a') => dispatch(app, Action::ToggleSort(SortSpec::SIZE_ASCENDING))?,
        KeyCode::Char('d') => dispatch(app, Action::ToggleSort(SortSpec::SIZE_DESCENDING))?,
        KeyCode::Char('r') => dispatch(app, Action::CycleRatingFilter)?,
        KeyCode::Char('0') => dispatch(app, Action::SetRatingFilter(None))?,

        KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::Right => dispatch(app, Action::NextPage)?,
        KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::Left => dispatch(app, Action::PreviousPage)?,

        KeyCode::Esc => dispatch(app, Action::DismissError)?,

        _ => return Ok(false),
    }

    Ok(true)
}
