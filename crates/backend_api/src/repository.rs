use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use models::{ExpenseRecord, InvestmentRecord};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Store abstraction for the two dashboard queries. Window filtering
/// lives here, so the aggregation downstream never re-validates dates.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Expense records with date >= now - window_days.
    async fn fetch_expenses(&self, window_days: u32) -> Result<Vec<ExpenseRecord>>;
    /// Investment records with date >= now - window_days.
    async fn fetch_investments(&self, window_days: u32) -> Result<Vec<InvestmentRecord>>;
}

/// Stored expense rows carry the entry date used for window filtering.
/// The date is dropped after filtering; aggregation only needs amount
/// and category.
#[derive(Debug, Deserialize)]
struct ExpenseRow {
    amount: f64,
    category: String,
    date: DateTime<Utc>,
}

/// File-based implementation reading `expenses.json` and
/// `investments.json` from a database directory.
pub struct FileRecordStore {
    database_dir: PathBuf,
}

impl FileRecordStore {
    pub fn new<P: AsRef<Path>>(database_dir: P) -> Self {
        Self {
            database_dir: database_dir.as_ref().to_path_buf(),
        }
    }

    async fn load<T: serde::de::DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.database_dir.join(filename);
        let content = tokio::fs::read_to_string(&path).await?;
        let rows: Vec<T> = serde_json::from_str(&content)?;
        Ok(rows)
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn fetch_expenses(&self, window_days: u32) -> Result<Vec<ExpenseRecord>> {
        let cutoff = Utc::now() - Duration::days(window_days as i64);
        let rows: Vec<ExpenseRow> = self.load("expenses.json").await?;
        Ok(rows
            .into_iter()
            .filter(|row| row.date >= cutoff)
            .map(|row| ExpenseRecord {
                amount: row.amount,
                category: row.category,
            })
            .collect())
    }

    async fn fetch_investments(&self, window_days: u32) -> Result<Vec<InvestmentRecord>> {
        let cutoff = Utc::now() - Duration::days(window_days as i64);
        let rows: Vec<InvestmentRecord> = self.load("investments.json").await?;
        Ok(rows.into_iter().filter(|row| row.date >= cutoff).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_db(dir: &Path, filename: &str, content: &str) {
        std::fs::write(dir.join(filename), content).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_expenses_filters_by_window() {
        let dir = tempfile::tempdir().unwrap();
        let recent = Utc::now() - Duration::days(5);
        let stale = Utc::now() - Duration::days(400);
        write_db(
            dir.path(),
            "expenses.json",
            &format!(
                r#"[
                    {{"amount": 30.0, "category": "Food", "date": "{}"}},
                    {{"amount": 99.0, "category": "Old", "date": "{}"}}
                ]"#,
                recent.to_rfc3339(),
                stale.to_rfc3339()
            ),
        );

        let store = FileRecordStore::new(dir.path());
        let records = store.fetch_expenses(30).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Food");
        assert_eq!(records[0].amount, 30.0);
    }

    #[tokio::test]
    async fn test_fetch_investments_filters_by_window() {
        let dir = tempfile::tempdir().unwrap();
        let recent = Utc::now() - Duration::days(30);
        let stale = Utc::now() - Duration::days(365);
        write_db(
            dir.path(),
            "investments.json",
            &format!(
                r#"[
                    {{"amount": 500.0, "type": "Stocks", "date": "{}"}},
                    {{"amount": 900.0, "type": "Bonds", "date": "{}"}}
                ]"#,
                recent.to_rfc3339(),
                stale.to_rfc3339()
            ),
        );

        let store = FileRecordStore::new(dir.path());
        let records = store.fetch_investments(180).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "Stocks");
    }

    #[tokio::test]
    async fn test_fetch_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecordStore::new(dir.path());
        assert!(store.fetch_expenses(30).await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_fails_on_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        write_db(dir.path(), "expenses.json", "{not json");
        let store = FileRecordStore::new(dir.path());
        assert!(store.fetch_expenses(30).await.is_err());
    }
}
