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
use tracing::debug;

use crate::{App, state::Action, tasks::AppTask};

/// Reduces an action into the view state and hands any resulting effect to
/// the task worker.
///
/// Actions that change which records are on screen also move the table
/// selection back to the first card.
pub(crate) fn dispatch(app: &mut App, action: Action) -> Result<()> {
    let moves_page = matches!(
        action,
        Action::CatalogLoaded { .. }
            | Action::SearchSucceeded { .. }
            | Action::SetRatingFilter(_)
            | Action::CycleRatingFilter
            | Action::ToggleSort(_)
            | Action::SetSort(_)
            | Action::GotoPage(_)
            | Action::NextPage
            | Action::PreviousPage
    );

    if let Action::Search(query) = &action {
        let query = query.trim();
        if !query.is_empty() {
            app.search_bar.set_value(query);
        }
    }

    if let Some(effect) = app.state.reduce(action) {
        let task = AppTask::from(effect);
        debug!(?task, "Dispatching task");
        app.task_tx.send(task)?;
    }

    if moves_page {
        let len = app.state.page().records.len();
        app.dataset_table.select_first(len);
    }

    Ok(())
}

pub(super) fn handle_tick(app: &mut App) {
    app.ticks = app.ticks.wrapping_add(1);
}
