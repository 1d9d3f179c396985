use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use chart_adapter::{ChartKind, ChartView, DEFAULT_X_KEY, DEFAULT_Y_KEY};
use dashboard_engine::{
    assemble_dashboard, fallback_dataset, summarize_expenses, summarize_investments, RecordKind,
    EXPENSE_WINDOW_DAYS, INVESTMENT_WINDOW_DAYS,
};
use models::{ChartSeries, DashboardData};

use crate::{repository::RecordStore, Result};

pub type StoreState = Arc<dyn RecordStore>;

/// GET /api/dashboard
/// Returns the complete dashboard payload. Fetch faults never surface
/// here; they are demoted to the `errors` diagnostics channel while the
/// affected card serves the fallback dataset.
pub async fn get_dashboard(State(store): State<StoreState>) -> Json<DashboardData> {
    let expenses = store
        .fetch_expenses(EXPENSE_WINDOW_DAYS)
        .await
        .map_err(|e| {
            tracing::warn!("expense fetch failed, serving fallback: {e}");
            e.to_string()
        });
    let investments = store
        .fetch_investments(INVESTMENT_WINDOW_DAYS)
        .await
        .map_err(|e| {
            tracing::warn!("investment fetch failed, serving fallback: {e}");
            e.to_string()
        });

    Json(assemble_dashboard(expenses, investments))
}

fn chart_view(kind: ChartKind, series: &ChartSeries, color: &str) -> Result<ChartView> {
    let rows = chart_adapter::normalize(series, DEFAULT_X_KEY)?;
    Ok(chart_adapter::render(
        kind,
        rows,
        DEFAULT_X_KEY,
        DEFAULT_Y_KEY,
        color,
    ))
}

/// GET /api/charts/expenses
/// Category-breakdown bar chart, normalized for the chart widget.
pub async fn get_expense_chart(State(store): State<StoreState>) -> Result<Json<ChartView>> {
    let (_, series) = match store.fetch_expenses(EXPENSE_WINDOW_DAYS).await {
        Ok(records) if !records.is_empty() => summarize_expenses(&records, EXPENSE_WINDOW_DAYS),
        Ok(_) => fallback_dataset(RecordKind::Expense),
        Err(e) => {
            tracing::warn!("expense fetch failed, serving fallback: {e}");
            fallback_dataset(RecordKind::Expense)
        }
    };
    Ok(Json(chart_view(ChartKind::Bar, &series, "indigo")?))
}

/// GET /api/charts/investments
/// Cumulative growth line chart, normalized for the chart widget.
pub async fn get_investment_chart(State(store): State<StoreState>) -> Result<Json<ChartView>> {
    let (_, series) = match store.fetch_investments(INVESTMENT_WINDOW_DAYS).await {
        Ok(records) if !records.is_empty() => {
            summarize_investments(&records, INVESTMENT_WINDOW_DAYS)
        }
        Ok(_) => fallback_dataset(RecordKind::Investment),
        Err(e) => {
            tracing::warn!("investment fetch failed, serving fallback: {e}");
            fallback_dataset(RecordKind::Investment)
        }
    };
    Ok(Json(chart_view(ChartKind::Line, &series, "emerald")?))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "finance-dashboard-api"
    }))
}
