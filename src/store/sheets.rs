//! Implements the expense store against the Google Sheets API.

use async_trait::async_trait;
use sheets::types::{
    BatchUpdateValuesRequest, DateTimeRenderOption, Dimension, ValueInputOption, ValueRange,
    ValueRenderOption,
};

use crate::{
    Error, SheetsConfig,
    expense::{COLUMN_HEADERS, Expense},
    store::{ExpenseStore, raw_rows},
};

/// Expense rows live in columns A to D of the spreadsheet's first sheet.
const DATA_RANGE: &str = "A:D";

/// An expense store backed by one Google spreadsheet.
///
/// The header row is rewritten idempotently as part of every append, so a
/// fresh spreadsheet works without manual setup.
pub struct GoogleSheetsStore {
    spreadsheet_id: String,
    client: sheets::Client,
}

impl GoogleSheetsStore {
    /// Create a store for the spreadsheet named by `config`.
    pub fn new(config: SheetsConfig) -> Self {
        // Only the access token is needed. The OAuth app fields are unused
        // because the token is provisioned outside this process.
        let client = sheets::Client::new(
            String::new(),
            String::new(),
            String::new(),
            config.access_token,
            String::new(),
        );

        Self {
            spreadsheet_id: config.spreadsheet_id,
            client,
        }
    }

    async fn fetch_cells(&self) -> Result<Vec<Vec<String>>, Error> {
        let response = self
            .client
            .spreadsheets()
            .values_get(
                &self.spreadsheet_id,
                DATA_RANGE,
                DateTimeRenderOption::FormattedString,
                Dimension::Rows,
                ValueRenderOption::FormattedValue,
            )
            .await
            .map_err(map_client_error)?;

        Ok(response.body.values)
    }
}

#[async_trait]
impl ExpenseStore for GoogleSheetsStore {
    async fn append_row(&self, expense: &Expense) -> Result<(), Error> {
        let occupied_rows = self.fetch_cells().await?.len();

        // Row 1 always holds the header; the record lands on the first row
        // after the existing data.
        let record_row = occupied_rows.max(1) + 1;

        let data = vec![
            ValueRange {
                major_dimension: Some(Dimension::Rows),
                range: "A1:D1".to_string(),
                values: vec![
                    COLUMN_HEADERS
                        .iter()
                        .map(|header| header.to_string())
                        .collect(),
                ],
            },
            ValueRange {
                major_dimension: Some(Dimension::Rows),
                range: format!("A{record_row}:D{record_row}"),
                values: vec![expense.to_row()],
            },
        ];

        let request = BatchUpdateValuesRequest {
            data,
            include_values_in_response: Some(false),
            response_date_time_render_option: None,
            response_value_render_option: None,
            value_input_option: Some(ValueInputOption::UserEntered),
        };

        self.client
            .spreadsheets()
            .values_batch_update(&self.spreadsheet_id, &request)
            .await
            .map_err(map_client_error)?;

        Ok(())
    }

    async fn list_rows(&self) -> Result<Vec<Expense>, Error> {
        let cells = self.fetch_cells().await?;

        Ok(raw_rows(cells).iter().map(Expense::from_raw).collect())
    }
}

fn map_client_error(error: sheets::ClientError) -> Error {
    Error::SheetsApi(error.to_string())
}
