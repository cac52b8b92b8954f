mod client;
pub mod models;

pub use client::GoogleSheetsClient;
pub use models::{leads_from_rows, LeadRecord, ValueRange};

use crate::error::RelayResult;
use async_trait::async_trait;

/// Read access to spreadsheet ranges
#[async_trait]
pub trait SheetSource: Send + Sync + 'static {
    /// Fetch the raw rows of `range`, header row included
    async fn read_range(&self, range: &str) -> RelayResult<ValueRange>;
}

/// Read `range` and shape it into lead records
pub async fn fetch_leads(source: &dyn SheetSource, range: &str) -> RelayResult<Vec<LeadRecord>> {
    let value_range = source.read_range(range).await?;
    if value_range.values.is_empty() {
        tracing::warn!("No data found in range {}", range);
    }
    Ok(leads_from_rows(&value_range.values))
}
