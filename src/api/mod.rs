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

//! Client for the dataset recommendation service.
//!
//! The service exposes two endpoints:
//!
//! * `GET /api/datasets/` lists the full catalog.
//! * `POST /api/query/` with `{"query": "..."}` ranks the catalog against a
//!   free-text query, each result carrying a `similarity_score`.
//!
//! Calls are blocking and are only ever made from the task worker thread.

mod error;

pub(crate) use error::ApiError;

use std::time::Duration;

use reqwest::{
    Url,
    blocking::{Client, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{config::AppConfig, model::DatasetRecord};

const DATASETS_PATH: &str = "api/datasets/";
const QUERY_PATH: &str = "api/query/";

const MAX_ERROR_BODY: usize = 200;

pub(crate) trait DatasetApi: Send + Sync {
    fn fetch_datasets(&self) -> Result<Vec<DatasetRecord>, ApiError>;

    fn query(&self, query: &str) -> Result<Vec<DatasetRecord>, ApiError>;
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub(crate) struct HttpDatasetApi {
    client: Client,
    base_url: Url,
}

impl HttpDatasetApi {
    /// Builds a client for the service at the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be initialised.
    pub(crate) fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.api_base_url)?;

        let client = Client::builder()
            .timeout(config.request_timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|source| ApiError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))
    }
}

impl DatasetApi for HttpDatasetApi {
    fn fetch_datasets(&self) -> Result<Vec<DatasetRecord>, ApiError> {
        let url = self.endpoint(DATASETS_PATH)?;
        debug!(%url, "Fetching dataset catalog");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| transport(&url, source))?;

        let records = read_records(&url, response)?;
        info!(count = records.len(), "Dataset catalog loaded");

        Ok(records)
    }

    fn query(&self, query: &str) -> Result<Vec<DatasetRecord>, ApiError> {
        let url = self.endpoint(QUERY_PATH)?;
        debug!(%url, query, "Submitting query");

        let response = self
            .client
            .post(url.clone())
            .json(&QueryRequest { query })
            .send()
            .map_err(|source| transport(&url, source))?;

        let records = read_records(&url, response)?;
        info!(query, count = records.len(), "Query results received");

        Ok(records)
    }
}

// Url::join drops the last path segment unless it ends with a slash.
fn parse_base_url(base: &str) -> Result<Url, ApiError> {
    let mut base = base.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Url::parse(&base).map_err(|_| ApiError::BaseUrl(base))
}

fn transport(url: &Url, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

fn read_records(url: &Url, response: Response) -> Result<Vec<DatasetRecord>, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().map_err(|source| transport(url, source))?;

    decode_records(url, status, &body)
}

/// Turns a raw response into dataset records.
///
/// Non-2xx responses become [`ApiError::Status`], using the service's
/// `{"error": "..."}` message when the body carries one.
fn decode_records(url: &Url, status: u16, body: &str) -> Result<Vec<DatasetRecord>, ApiError> {
    if !(200..300).contains(&status) {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(error_body) => error_body.error,
            Err(_) => body.chars().take(MAX_ERROR_BODY).collect(),
        };

        return Err(ApiError::Status {
            url: url.to_string(),
            status,
            message,
        });
    }

    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpDatasetApi {
        let config = AppConfig {
            api_base_url: base.to_string(),
            ..AppConfig::default()
        };
        HttpDatasetApi::new(&config).unwrap()
    }

    #[test]
    fn endpoints_join_onto_base_url() {
        let api = api("http://127.0.0.1:8000");
        assert_eq!(
            api.endpoint(DATASETS_PATH).unwrap().as_str(),
            "http://127.0.0.1:8000/api/datasets/"
        );
        assert_eq!(
            api.endpoint(QUERY_PATH).unwrap().as_str(),
            "http://127.0.0.1:8000/api/query/"
        );
    }

    #[test]
    fn base_url_path_is_kept() {
        let api = api("http://localhost:9000/edmrec");
        assert_eq!(
            api.endpoint(QUERY_PATH).unwrap().as_str(),
            "http://localhost:9000/edmrec/api/query/"
        );
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let config = AppConfig {
            api_base_url: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(HttpDatasetApi::new(&config), Err(ApiError::BaseUrl(_))));
    }

    #[test]
    fn query_body_is_a_single_field_object() {
        let body = serde_json::to_string(&QueryRequest { query: "sales data" }).unwrap();
        assert_eq!(body, r#"{"query":"sales data"}"#);
    }

    #[test]
    fn decodes_result_array() {
        let url = Url::parse("http://127.0.0.1:8000/api/query/").unwrap();
        let body = r#"[
            {"id": 3, "title": "Sales", "description": "d", "url": "u", "size": "2 MB",
             "format": "csv", "similarity_score": 0.42},
            {"id": 9, "title": "Reviews", "description": "d", "url": "u", "size": "80 KB",
             "format": "json", "similarity_score": 0.18}
        ]"#;

        let records = decode_records(&url, 200, body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].similarity_score, Some(0.18));
    }

    #[test]
    fn error_status_uses_service_message() {
        let url = Url::parse("http://127.0.0.1:8000/api/query/").unwrap();
        let err = decode_records(&url, 400, r#"{"error": "Query text is required"}"#).unwrap_err();

        match err {
            ApiError::Status { status, message, .. } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Query text is required");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn error_status_falls_back_to_truncated_body() {
        let url = Url::parse("http://127.0.0.1:8000/api/query/").unwrap();
        let body = "x".repeat(1000);
        let err = decode_records(&url, 500, &body).unwrap_err();

        match err {
            ApiError::Status { message, .. } => assert_eq!(message.len(), MAX_ERROR_BODY),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let url = Url::parse("http://127.0.0.1:8000/api/datasets/").unwrap();
        let err = decode_records(&url, 200, r#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
