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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (API responses), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function turns each event into a
//!    view state [`Action`], reduces it, and forwards any resulting effect to
//!    the task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::DatasetRecord, render::draw, state::Action};

pub(crate) use handlers::dispatch;

/// The widget receiving unhandled key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
    Sidebar,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Dispatch(Action),

    CatalogLoaded {
        request_id: u64,
        datasets: Vec<DatasetRecord>,
    },
    SearchResultsReady {
        request_id: u64,
        query: String,
        results: Vec<DatasetRecord>,
    },
    RequestFailed {
        request_id: u64,
        error: String,
    },

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Dispatch(action) => dispatch(app, action)?,
        AppEvent::CatalogLoaded {
            request_id,
            datasets,
        } => dispatch(
            app,
            Action::CatalogLoaded {
                request_id,
                datasets,
            },
        )?,
        AppEvent::SearchResultsReady {
            request_id,
            query,
            results,
        } => dispatch(
            app,
            Action::SearchSucceeded {
                request_id,
                query,
                results,
            },
        )?,
        AppEvent::RequestFailed { request_id, error } => {
            dispatch(app, Action::RequestFailed { request_id, error })?
        }
        AppEvent::Tick => handlers::handle_tick(app),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
