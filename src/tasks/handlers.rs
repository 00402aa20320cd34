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
use tracing::error;

use crate::{events::AppEvent, tasks::TaskContext};

pub(super) fn fetch_catalog(ctx: &TaskContext, request_id: u64) -> Result<()> {
    let event = match ctx.api.fetch_datasets() {
        Ok(datasets) => AppEvent::CatalogLoaded {
            request_id,
            datasets,
        },
        Err(e) => {
            error!(request_id, "Failed to fetch dataset catalog: {:#}", e);
            AppEvent::RequestFailed {
                request_id,
                error: e.to_string(),
            }
        }
    };

    ctx.event_tx.send(event)?;

    Ok(())
}

pub(super) fn query(ctx: &TaskContext, request_id: u64, query: String) -> Result<()> {
    let event = match ctx.api.query(&query) {
        Ok(results) => AppEvent::SearchResultsReady {
            request_id,
            query,
            results,
        },
        Err(e) => {
            error!(request_id, query = %query, "Failed to fetch query results: {:#}", e);
            AppEvent::RequestFailed {
                request_id,
                error: e.to_string(),
            }
        }
    };

    ctx.event_tx.send(event)?;

    Ok(())
}
