use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Raw records, as returned by the data store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub amount: f64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentRecord {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: DateTime<Utc>,
}

// Aggregated output models
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryView {
    pub total: f64,
    pub period: String,
    pub description: String,
}

/// One named series in a labeled chart. `data[i]` belongs to `labels[i]`
/// of the enclosing [`ChartSeries::Labeled`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// A flattened chart row: the x-axis key maps to a label, every other
/// key maps to a numeric column. Insertion order is preserved
/// (serde_json is built with `preserve_order`).
pub type NormalizedRow = serde_json::Map<String, serde_json::Value>;

/// Chart data in one of the two accepted shapes. The discriminant is
/// explicit so both cases are handled exhaustively instead of sniffing
/// the shape at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", content = "series", rename_all = "snake_case")]
pub enum ChartSeries {
    /// Already row-oriented, ready for rendering.
    Rows(Vec<NormalizedRow>),
    /// Label axis plus one or more datasets indexed against it.
    Labeled {
        labels: Vec<String>,
        datasets: Vec<Dataset>,
    },
}

impl ChartSeries {
    pub fn empty() -> Self {
        ChartSeries::Labeled {
            labels: vec![],
            datasets: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ChartSeries::Rows(rows) => rows.is_empty(),
            ChartSeries::Labeled { labels, .. } => labels.is_empty(),
        }
    }
}

/// Per-source diagnostics from the fetch step. Populated when a live
/// fetch failed and fallback data was substituted; never fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FetchErrors {
    pub expenses: Option<String>,
    pub investments: Option<String>,
}

/// The complete dashboard payload handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub expense_summary: SummaryView,
    pub investment_insights: SummaryView,
    pub expense_chart_data: ChartSeries,
    pub investment_chart_data: ChartSeries,
    pub errors: FetchErrors,
}
