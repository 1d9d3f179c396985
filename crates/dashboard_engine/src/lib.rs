use std::sync::OnceLock;

use chrono::{TimeZone, Utc};
use models::{
    ChartSeries, DashboardData, Dataset, ExpenseRecord, FetchErrors, InvestmentRecord, SummaryView,
};

/// Trailing window the expense query covers, in days.
pub const EXPENSE_WINDOW_DAYS: u32 = 30;
/// Trailing window the investment query covers, in days.
pub const INVESTMENT_WINDOW_DAYS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Expense,
    Investment,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Human-readable label for a trailing window. Whole multiples of 30
/// days beyond one month read as months ("Last 6 months").
fn window_label(days: u32) -> String {
    if days > 30 && days % 30 == 0 {
        format!("Last {} months", days / 30)
    } else {
        format!("Last {} days", days)
    }
}

/// Group expenses by category (first-seen order) and sum per group.
///
/// Records are assumed pre-filtered to the trailing `window_days`-day
/// window by the data store; dates are not re-validated here. Empty
/// input yields a zero total and an empty series; substituting the
/// fallback pair in that case is the caller's policy.
pub fn summarize_expenses(
    records: &[ExpenseRecord],
    window_days: u32,
) -> (SummaryView, ChartSeries) {
    let mut labels: Vec<String> = Vec::new();
    let mut sums: Vec<f64> = Vec::new();
    let mut total = 0.0;
    for record in records {
        total += record.amount;
        match labels.iter().position(|c| c == &record.category) {
            Some(i) => sums[i] += record.amount,
            None => {
                labels.push(record.category.clone());
                sums.push(record.amount);
            }
        }
    }

    let period = window_label(window_days);
    let summary = SummaryView {
        total: round2(total),
        description: format!("Sum of all expenses in the {}.", period.to_lowercase()),
        period,
    };
    let chart = if records.is_empty() {
        ChartSeries::empty()
    } else {
        ChartSeries::Labeled {
            labels,
            datasets: vec![Dataset {
                label: "Expenses".to_string(),
                data: sums.into_iter().map(round2).collect(),
            }],
        }
    };
    (summary, chart)
}

/// Cumulative running-total series over the investment records, sorted
/// ascending by date (stable, ties keep input order). The series is
/// non-decreasing for non-negative amounts and its last point equals
/// the summary total.
pub fn summarize_investments(
    records: &[InvestmentRecord],
    window_days: u32,
) -> (SummaryView, ChartSeries) {
    let mut sorted: Vec<&InvestmentRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut labels = Vec::with_capacity(sorted.len());
    let mut data = Vec::with_capacity(sorted.len());
    let mut running = 0.0;
    for record in &sorted {
        running += record.amount;
        labels.push(record.date.format("%Y-%m-%d").to_string());
        data.push(round2(running));
    }

    let period = window_label(window_days);
    let summary = SummaryView {
        total: round2(running),
        description: format!(
            "Growth of investments tracked over the {}.",
            period.to_lowercase()
        ),
        period,
    };
    let chart = if records.is_empty() {
        ChartSeries::empty()
    } else {
        ChartSeries::Labeled {
            labels,
            datasets: vec![Dataset {
                label: "Investment Value".to_string(),
                data,
            }],
        }
    };
    (summary, chart)
}

// Fixed fallback records, substituted when the live fetch fails or
// comes back empty. Literal values so repeated calls are bit-identical.
fn mock_expenses() -> Vec<ExpenseRecord> {
    let rows = [
        (125.30, "Groceries"),
        (55.99, "Dining"),
        (200.00, "Utilities"),
        (12.99, "Subscriptions"),
        (45.00, "Transportation"),
        (89.99, "Entertainment"),
        (350.00, "Housing"),
        (75.50, "Shopping"),
    ];
    rows.iter()
        .map(|&(amount, category)| ExpenseRecord {
            amount,
            category: category.to_string(),
        })
        .collect()
}

fn mock_investments() -> Vec<InvestmentRecord> {
    let rows = [
        (1200.0, "Stocks", (2025, 3, 5)),
        (800.0, "ETF", (2025, 3, 21)),
        (1500.0, "Crypto", (2025, 4, 10)),
        (650.0, "Bonds", (2025, 5, 2)),
        (900.0, "Stocks", (2025, 5, 28)),
        (1100.0, "ETF", (2025, 6, 15)),
        (700.0, "Real Estate", (2025, 7, 9)),
        (1350.0, "Stocks", (2025, 8, 1)),
    ];
    rows.iter()
        .map(|&(amount, kind, (y, m, d))| InvestmentRecord {
            amount,
            kind: kind.to_string(),
            date: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
        })
        .collect()
}

/// Deterministic fallback pair for one card. Computed once per process
/// and cloned out, so repeated calls return identical values.
pub fn fallback_dataset(kind: RecordKind) -> (SummaryView, ChartSeries) {
    static EXPENSE: OnceLock<(SummaryView, ChartSeries)> = OnceLock::new();
    static INVESTMENT: OnceLock<(SummaryView, ChartSeries)> = OnceLock::new();
    match kind {
        RecordKind::Expense => EXPENSE
            .get_or_init(|| summarize_expenses(&mock_expenses(), EXPENSE_WINDOW_DAYS))
            .clone(),
        RecordKind::Investment => INVESTMENT
            .get_or_init(|| summarize_investments(&mock_investments(), INVESTMENT_WINDOW_DAYS))
            .clone(),
    }
}

/// Assemble the complete dashboard payload from the two fetch outcomes.
///
/// Never fails: a failed or empty fetch is replaced by the fallback
/// pair, and a failure additionally lands its diagnostic in `errors`.
pub fn assemble_dashboard(
    expenses: Result<Vec<ExpenseRecord>, String>,
    investments: Result<Vec<InvestmentRecord>, String>,
) -> DashboardData {
    let mut errors = FetchErrors::default();

    let (expense_summary, expense_chart_data) = match expenses {
        Ok(records) if !records.is_empty() => summarize_expenses(&records, EXPENSE_WINDOW_DAYS),
        Ok(_) => fallback_dataset(RecordKind::Expense),
        Err(msg) => {
            errors.expenses = Some(msg);
            fallback_dataset(RecordKind::Expense)
        }
    };

    let (investment_insights, investment_chart_data) = match investments {
        Ok(records) if !records.is_empty() => {
            summarize_investments(&records, INVESTMENT_WINDOW_DAYS)
        }
        Ok(_) => fallback_dataset(RecordKind::Investment),
        Err(msg) => {
            errors.investments = Some(msg);
            fallback_dataset(RecordKind::Investment)
        }
    };

    DashboardData {
        expense_summary,
        investment_insights,
        expense_chart_data,
        investment_chart_data,
        errors,
    }
}
