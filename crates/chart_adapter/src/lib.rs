use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use models::{ChartSeries, NormalizedRow};

/// Default x-axis key used by the chart widget.
pub const DEFAULT_X_KEY: &str = "name";
/// Default y-axis key used by the chart widget.
pub const DEFAULT_Y_KEY: &str = "value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Area,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    #[error("dataset '{dataset}' has {actual} data points, expected {expected} to match the label axis")]
    LengthMismatch {
        dataset: String,
        expected: usize,
        actual: usize,
    },
}

/// Everything the generic chart widget needs for one draw call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartView {
    pub kind: ChartKind,
    pub rows: Vec<NormalizedRow>,
    pub x_key: String,
    pub y_key: String,
    pub color: String,
}

fn dataset_key(label: &str, index: usize) -> String {
    if label.is_empty() {
        format!("dataset_{}", index)
    } else {
        label.to_string()
    }
}

/// Normalize a chart series into row-oriented form.
///
/// Row-shaped input is returned unchanged, so the operation is
/// idempotent. A labeled series becomes one row per label: the x-axis
/// key maps to the label and every dataset contributes its own column,
/// keyed by the dataset label (or a synthetic `dataset_<index>` name
/// when the label is empty). A dataset whose data length disagrees with
/// the label axis is rejected rather than truncated, since a silently
/// shortened chart misleads.
pub fn normalize(series: &ChartSeries, x_key: &str) -> Result<Vec<NormalizedRow>, AdapterError> {
    match series {
        ChartSeries::Rows(rows) => Ok(rows.clone()),
        ChartSeries::Labeled { labels, datasets } => {
            for (index, dataset) in datasets.iter().enumerate() {
                if dataset.data.len() != labels.len() {
                    return Err(AdapterError::LengthMismatch {
                        dataset: dataset_key(&dataset.label, index),
                        expected: labels.len(),
                        actual: dataset.data.len(),
                    });
                }
            }

            let rows = labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let mut row = NormalizedRow::new();
                    row.insert(x_key.to_string(), Value::String(label.clone()));
                    for (index, dataset) in datasets.iter().enumerate() {
                        row.insert(
                            dataset_key(&dataset.label, index),
                            Value::from(dataset.data[i]),
                        );
                    }
                    row
                })
                .collect();
            Ok(rows)
        }
    }
}

/// Assemble the draw call for the chart widget. Total function: the
/// rows are taken as already normalized and the color token always
/// resolves (unknown names fall back to the primary color).
pub fn render(
    kind: ChartKind,
    rows: Vec<NormalizedRow>,
    x_key: &str,
    y_key: &str,
    color_token: &str,
) -> ChartView {
    ChartView {
        kind,
        rows,
        x_key: x_key.to_string(),
        y_key: y_key.to_string(),
        color: color_hex(color_token).to_string(),
    }
}

/// Resolve a color token to its hex value. Unrecognized names return
/// the primary color.
pub fn color_hex(name: &str) -> &'static str {
    match name {
        "primary" => "#0ea5e9",
        "secondary" => "#8b5cf6",
        "indigo" => "#6366f1",
        "emerald" => "#10b981",
        "green" => "#22c55e",
        "red" => "#ef4444",
        "blue" => "#3b82f6",
        "teal" => "#14b8a6",
        "gray" => "#6b7280",
        "amber" => "#f59e0b",
        _ => "#0ea5e9",
    }
}
