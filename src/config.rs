//! Environment configuration for the Google Sheets row store.

use std::env;

pub(crate) const SHEET_ID_VAR: &str = "GOOGLE_SHEET_ID";
pub(crate) const ACCESS_TOKEN_VAR: &str = "GOOGLE_ACCESS_TOKEN";

/// Connection settings for the Google Sheets row store.
///
/// The credentials are treated as opaque: issuing and refreshing the access
/// token happens outside this process.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// The ID of the spreadsheet that stores expense rows.
    pub spreadsheet_id: String,
    /// An OAuth access token with write access to the spreadsheet.
    pub access_token: String,
}

impl SheetsConfig {
    /// Read the store configuration from the environment.
    ///
    /// Returns `None` when either variable is missing or empty. The server
    /// then runs unconfigured: reads degrade to no data and writes fail with
    /// a configuration error.
    pub fn from_env() -> Option<Self> {
        let spreadsheet_id = env::var(SHEET_ID_VAR).ok().filter(|id| !id.is_empty())?;
        let access_token = env::var(ACCESS_TOKEN_VAR)
            .ok()
            .filter(|token| !token.is_empty())?;

        Some(Self {
            spreadsheet_id,
            access_token,
        })
    }
}
