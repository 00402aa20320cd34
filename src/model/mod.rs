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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the dataset
//! records returned by the recommendation service together with their derived
//! star ratings, and the search history kept for the sidebar.

pub(crate) mod history;
pub(crate) mod rating;

use serde::{Deserialize, Serialize};

pub(crate) use history::SearchHistory;
pub(crate) use rating::{Rating, StarTier};

const KB_PER_MB: f64 = 1024.0;
const MB_PER_GB: f64 = 1024.0;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A single catalog entry or query result.
///
/// Query results carry a `similarity_score`, catalog listings do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub size: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub format: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

impl DatasetRecord {
    /// Returns the dataset size normalised to megabytes.
    ///
    /// The leading number of the size label is read as megabytes unless a
    /// unit suffix says otherwise: `KB` divides by 1024, `GB` multiplies by
    /// 1024 and a bare `B` is treated as bytes. Labels without a leading
    /// number yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// // "500 KB" -> Some(0.488...)
    /// // "3.1 MB" -> Some(3.1)
    /// // "unknown" -> None
    /// ```
    pub(crate) fn size_in_mb(&self) -> Option<f64> {
        parse_size_mb(&self.size)
    }

    pub(crate) fn rating(&self) -> Rating {
        Rating::from_score(self.similarity_score)
    }
}

fn parse_size_mb(label: &str) -> Option<f64> {
    let label = label.trim();

    // Longest numeric prefix, at most one decimal point.
    let mut seen_point = false;
    let number_len = label
        .char_indices()
        .take_while(|(i, c)| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            '-' | '+' => *i == 0,
            _ => false,
        })
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    let value: f64 = label[..number_len].parse().ok()?;
    let unit = label[number_len..].trim_start().to_ascii_uppercase();

    let mb = if unit.starts_with("KB") {
        value / KB_PER_MB
    } else if unit.starts_with("GB") {
        value * MB_PER_GB
    } else if unit.starts_with("MB") {
        value
    } else if unit.starts_with('B') {
        value / BYTES_PER_MB
    } else {
        value
    };

    Some(mb)
}

// The service stores sizes and formats as nullable strings.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn record(id: i64, size: &str, score: Option<f64>) -> DatasetRecord {
    DatasetRecord {
        id,
        title: format!("Dataset {id}"),
        description: String::new(),
        size: size.to_string(),
        format: "CSV".to_string(),
        url: format!("https://example.com/dataset{id}"),
        source: None,
        similarity_score: score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilobytes_convert_to_megabytes() {
        let mb = parse_size_mb("500 KB").unwrap();
        assert!((mb - 500.0 / 1024.0).abs() < 1e-9);
    }

    #[test]
    fn megabytes_and_unitless_read_as_is() {
        assert_eq!(parse_size_mb("3.1 MB"), Some(3.1));
        assert_eq!(parse_size_mb("12"), Some(12.0));
        assert_eq!(parse_size_mb("7MB"), Some(7.0));
    }

    #[test]
    fn gigabytes_and_bytes_are_scaled() {
        assert_eq!(parse_size_mb("2 GB"), Some(2048.0));
        assert_eq!(parse_size_mb("1048576 B"), Some(1.0));
        assert_eq!(parse_size_mb("1 kb"), Some(1.0 / 1024.0));
    }

    #[test]
    fn unit_is_read_from_the_start_of_the_suffix() {
        assert_eq!(parse_size_mb("12.4 KB (zip)"), Some(12.4 / 1024.0));
        assert_eq!(parse_size_mb("3 GB compressed"), Some(3072.0));
        assert_eq!(parse_size_mb("2 MB, 4 files"), Some(2.0));
    }

    #[test]
    fn number_stops_at_a_second_decimal_point() {
        assert_eq!(parse_size_mb("5.2.1 MB"), Some(5.2));
        assert_eq!(parse_size_mb("5.2.1 KB"), Some(5.2 / 1024.0));
    }

    #[test]
    fn labels_without_a_number_are_unparseable() {
        assert_eq!(parse_size_mb(""), None);
        assert_eq!(parse_size_mb("unknown"), None);
        assert_eq!(parse_size_mb("MB 12"), None);
    }

    #[test]
    fn catalog_json_decodes_without_score() {
        let json = r#"{
            "id": 4,
            "title": "Online Retail",
            "description": "Transactions for a UK retailer",
            "source": "kaggle",
            "url": "https://www.kaggle.com/datasets/online-retail",
            "size": "22.6 MB",
            "format": null,
            "created_at": "2024-07-01T10:00:00Z",
            "updated_at": "2024-07-01T10:00:00Z"
        }"#;

        let record: DatasetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.format, "");
        assert_eq!(record.source.as_deref(), Some("kaggle"));
        assert_eq!(record.similarity_score, None);
        assert_eq!(record.rating(), Rating::Unscored);
    }

    #[test]
    fn query_json_decodes_score() {
        let json = r#"{"id": 1, "title": "Sales", "description": "", "url": "u",
                       "size": "1 MB", "format": "csv", "similarity_score": 0.71}"#;

        let record: DatasetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rating(), Rating::Stars(StarTier::Five));
    }
}
