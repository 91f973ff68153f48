//! Record-store adapter over the Google Sheets values API.

use memline_core::config::MemlineConfig;
use memline_core::{MemlineError, MemlineResult};
use serde::Deserialize;
use serde_json::json;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// The remote tabular store holding the authoritative event rows.
pub struct SheetStore {
    client: reqwest::Client,
    spreadsheet_id: String,
    range: String,
    token: String,
}

impl SheetStore {
    pub fn new(config: &MemlineConfig) -> Self {
        SheetStore {
            client: reqwest::Client::new(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            range: config.sheet_range.clone(),
            token: config.sheets_token.clone(),
        }
    }

    /// Fetch every row from the sheet, in sheet order.
    ///
    /// Any transport or non-success response maps to `StoreUnavailable`;
    /// callers should treat that as "zero events" and surface the message.
    pub async fn load_all(&self) -> MemlineResult<Vec<Vec<String>>> {
        let url = format!(
            "{}/{}/values/{}",
            SHEETS_API_BASE, self.spreadsheet_id, self.range
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| MemlineError::StoreUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MemlineError::StoreUnavailable(format!("{status}: {body}")));
        }

        // An empty sheet comes back with no "values" key at all
        #[derive(Deserialize)]
        struct ValueRange {
            #[serde(default)]
            values: Vec<Vec<String>>,
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| MemlineError::StoreUnavailable(e.to_string()))?;

        Ok(body.values)
    }

    /// Append one row in store column order.
    ///
    /// Not idempotent: retrying after a timeout may duplicate the row.
    pub async fn append(&self, row: &[String]) -> MemlineResult<()> {
        let url = format!(
            "{}/{}/values/{}:append?valueInputOption=USER_ENTERED",
            SHEETS_API_BASE, self.spreadsheet_id, self.range
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| MemlineError::StoreUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MemlineError::StoreUnavailable(format!("{status}: {body}")));
        }

        Ok(())
    }
}
