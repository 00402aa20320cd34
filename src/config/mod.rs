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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "edmrec";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Base URL of the recommendation service, the `api/...` paths are
    /// appended to it.
    pub api_base_url: String,

    /// Request timeout, no timeout when absent.
    pub request_timeout_secs: Option<u64>,

    pub popular_searches: Vec<String>,

    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: None,
            popular_searches: vec![
                "Sales Data".to_string(),
                "Customer Reviews".to_string(),
                "Product Metadata".to_string(),
            ],
            log_file: "edmrec.log".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"api_base_url": "http://10.0.0.5:8000"}"#).unwrap();

        assert_eq!(config.api_base_url, "http://10.0.0.5:8000");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.popular_searches.len(), 3);
        assert_eq!(config.log_file, "edmrec.log");
    }
}
