use super::models::ValueRange;
use super::SheetSource;
use crate::components::google_auth::{AccessTokenProvider, SHEETS_READONLY_SCOPE};
use crate::error::{other_error, RelayResult};
use crate::utils::http::read_json;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;
use url::Url;

const SERVICE: &str = "Google Sheets";

/// Sheets v4 client bound to one spreadsheet
#[derive(Clone)]
pub struct GoogleSheetsClient {
    base_url: String,
    sheet_id: String,
    tokens: Arc<dyn AccessTokenProvider>,
    client: Client,
}

impl GoogleSheetsClient {
    pub fn new(
        base_url: String,
        sheet_id: String,
        tokens: Arc<dyn AccessTokenProvider>,
        client: Client,
    ) -> Self {
        Self {
            base_url,
            sheet_id,
            tokens,
            client,
        }
    }

    /// `{base}/spreadsheets/{sheet_id}/values/{range}`
    fn values_url(&self, range: &str) -> RelayResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| other_error("Sheets base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["spreadsheets", self.sheet_id.as_str(), "values", range]);
        Ok(url)
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsClient {
    async fn read_range(&self, range: &str) -> RelayResult<ValueRange> {
        let access_token = self.tokens.access_token(SHEETS_READONLY_SCOPE).await?;

        info!("Fetching range '{}' from sheet {}...", range, self.sheet_id);
        let response = self
            .client
            .get(self.values_url(range)?)
            .bearer_auth(access_token)
            .send()
            .await?;

        let value_range: ValueRange = read_json(SERVICE, response).await?;
        info!("Sheet returned {} rows", value_range.values.len());
        Ok(value_range)
    }
}
