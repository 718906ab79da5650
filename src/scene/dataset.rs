//! Card dataset loading.
//!
//! A dataset is a JSON array of cards:
//!
//! ```json
//! [{ "name": "Acme", "awards": "$1.2M",
//!    "recs": [{ "year": "2004", "seed": 3, "series_a": 1 }] }]
//! ```
//!
//! Each record is one year; every key other than `year` is a series.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SphereError;

/// Key of the label column in each record.
const LABEL_KEY: &str = "year";

/// One card's source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    /// Card title.
    pub name: String,
    /// Headline figure shown under the title (string or number).
    #[serde(default)]
    pub awards: Value,
    /// Yearly records; every key except `year` is a series value.
    #[serde(default)]
    pub recs: Vec<Map<String, Value>>,
}

/// One point of a stacked series.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedPoint {
    /// Record label (the year).
    pub label: String,
    /// This series' value.
    pub value: f64,
    /// Sum of the preceding series at this label.
    pub baseline: f64,
}

/// A named series stacked on top of the ones before it.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    /// Series key.
    pub name: String,
    /// One point per record, in record order.
    pub points: Vec<StackedPoint>,
}

impl CardData {
    /// Series keys, taken from the first record in key order.
    #[must_use]
    pub fn series_names(&self) -> Vec<String> {
        self.recs.first().map_or_else(Vec::new, |first| {
            first
                .keys()
                .filter(|key| key.as_str() != LABEL_KEY)
                .cloned()
                .collect()
        })
    }

    /// Stack the series for an area chart. Missing or non-numeric values
    /// count as zero.
    #[must_use]
    pub fn stacked_series(&self) -> Vec<StackedSeries> {
        let names = self.series_names();
        let mut baselines = vec![0.0; self.recs.len()];
        names
            .into_iter()
            .map(|name| {
                let points = self
                    .recs
                    .iter()
                    .zip(baselines.iter_mut())
                    .map(|(record, baseline)| {
                        let value = record.get(&name).map_or(0.0, numeric);
                        let point = StackedPoint {
                            label: record.get(LABEL_KEY).map_or_else(String::new, label),
                            value,
                            baseline: *baseline,
                        };
                        *baseline += value;
                        point
                    })
                    .collect();
                StackedSeries { name, points }
            })
            .collect()
    }
}

fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decode a dataset from JSON text.
pub fn parse_cards(json: &str) -> Result<Vec<CardData>, SphereError> {
    serde_json::from_str(json).map_err(|e| SphereError::Dataset(e.to_string()))
}

/// Load a dataset from a JSON file.
pub fn load_cards(path: &Path) -> Result<Vec<CardData>, SphereError> {
    let content = std::fs::read_to_string(path)?;
    let cards = parse_cards(&content)?;
    log::info!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Acme", "awards": "$1.2M", "recs": [
            {"year": "2004", "seed": 3, "series_a": 1},
            {"year": "2005", "seed": "4", "series_a": 2}
        ]},
        {"name": "Bare"}
    ]"#;

    #[test]
    fn parses_cards_with_optional_fields() {
        let cards = parse_cards(SAMPLE).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Acme");
        assert_eq!(cards[0].awards, Value::String("$1.2M".into()));
        assert!(cards[1].recs.is_empty());
        assert!(cards[1].stacked_series().is_empty());
    }

    #[test]
    fn series_stack_in_key_order() {
        let cards = parse_cards(SAMPLE).unwrap();
        let series = cards[0].stacked_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "seed");
        assert_eq!(series[1].name, "series_a");

        let second_year = &series[1].points[1];
        assert_eq!(second_year.label, "2005");
        assert_eq!(second_year.value, 2.0);
        assert_eq!(second_year.baseline, 4.0);
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        assert!(matches!(
            parse_cards("{\"name\": 1}"),
            Err(SphereError::Dataset(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("datasphere-no-such-dataset.json");
        assert!(matches!(load_cards(&path), Err(SphereError::Io(_))));
    }
}
