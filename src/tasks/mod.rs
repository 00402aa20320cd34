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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! calls to the recommendation service from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into API calls
//! and broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Each task runs on its own thread, so a stalled request never holds back a
//! newer one. Every task carries the request id assigned by the view state,
//! and every result event echoes it back so that stale responses can be
//! discarded.

mod handlers;

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

use anyhow::Result;
use tracing::{debug, warn};

use crate::{api::DatasetApi, events::AppEvent, state::Effect};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AppTask {
    FetchCatalog { request_id: u64 },
    Query { request_id: u64, query: String },
}

impl From<Effect> for AppTask {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::FetchCatalog { request_id } => AppTask::FetchCatalog { request_id },
            Effect::Query { request_id, query } => AppTask::Query { request_id, query },
        }
    }
}

/// Spawns a background thread to process application tasks.
///
/// The worker listens for incoming [`AppTask`]s until the task channel is
/// closed, handing each one to a thread of its own that shares the API
/// client.
///
/// # Arguments
///
/// * `api` - The recommendation service client.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    api: Arc<dyn DatasetApi>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            debug!(?task, "Processing task");

            let api = Arc::clone(&api);
            let event_tx = event_tx.clone();

            thread::spawn(move || {
                let ctx = TaskContext {
                    event_tx: &event_tx,
                    api: api.as_ref(),
                };

                if let Err(e) = handle_task(task, &ctx) {
                    // The UI side has gone away, nothing left to report to.
                    warn!("Dropping task result: {:#}", e);
                }
            });
        }
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    api: &'a dyn DatasetApi,
}

/// Orchestrates the execution of a single task.
///
/// Errors returned here are channel failures only, API failures are
/// reported back as [`AppEvent::RequestFailed`].
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchCatalog { request_id } => handlers::fetch_catalog(ctx, request_id),
        AppTask::Query { request_id, query } => handlers::query(ctx, request_id, query),
    }
}


#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::{fake::FakeApi, *};
    use crate::model::record;

    #[test]
    fn worker_answers_every_task_and_stops_when_channel_closes() {
        let api = FakeApi {
            catalog: vec![record(1, "1 MB", None)],
            results: vec![record(2, "2 MB", Some(0.8))],
            ..FakeApi::default()
        };
        let queries = api.queries.clone();

        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker = spawn_task_worker(Arc::new(api), task_rx, event_tx);

        task_tx.send(AppTask::FetchCatalog { request_id: 1 }).unwrap();
        task_tx
            .send(AppTask::Query {
                request_id: 2,
                query: "sales".into(),
            })
            .unwrap();
        drop(task_tx);

        // Tasks run side by side, results may arrive in either order.
        let timeout = Duration::from_secs(5);
        let mut catalog_seen = false;
        let mut results_seen = false;
        for _ in 0..2 {
            match event_rx.recv_timeout(timeout).unwrap() {
                AppEvent::CatalogLoaded { request_id, datasets } => {
                    assert_eq!(request_id, 1);
                    assert_eq!(datasets.len(), 1);
                    catalog_seen = true;
                }
                AppEvent::SearchResultsReady { request_id, query, results } => {
                    assert_eq!(request_id, 2);
                    assert_eq!(query, "sales");
                    assert_eq!(results[0].id, 2);
                    results_seen = true;
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert!(catalog_seen && results_seen);

        worker.join().unwrap();
        assert_eq!(*queries.lock().unwrap(), vec!["sales".to_string()]);
    }

    #[test]
    fn stalled_catalog_fetch_does_not_hold_back_a_newer_search() {
        let api = FakeApi {
            results: vec![record(5, "1 MB", Some(0.7))],
            catalog_delay: Some(Duration::from_secs(30)),
            ..FakeApi::default()
        };

        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(Arc::new(api), task_rx, event_tx);

        task_tx.send(AppTask::FetchCatalog { request_id: 1 }).unwrap();
        task_tx
            .send(AppTask::Query {
                request_id: 2,
                query: "sales".into(),
            })
            .unwrap();

        match event_rx.recv_timeout(Duration::from_secs(3)) {
            Ok(AppEvent::SearchResultsReady { request_id, results, .. }) => {
                assert_eq!(request_id, 2);
                assert_eq!(results[0].id, 5);
            }
            other => panic!("search still waiting behind the catalog fetch: {other:?}"),
        }
    }

    #[test]
    fn effects_map_onto_tasks() {
        assert_eq!(
            AppTask::from(Effect::Query {
                request_id: 4,
                query: "reviews".into()
            }),
            AppTask::Query {
                request_id: 4,
                query: "reviews".into()
            }
        );
        assert_eq!(
            AppTask::from(Effect::FetchCatalog { request_id: 1 }),
            AppTask::FetchCatalog { request_id: 1 }
        );
    }
}
