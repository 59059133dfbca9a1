//! Control de Gastos is a web app for recording personal expenses and
//! reviewing them on a dashboard.
//!
//! This library serves HTML pages directly. Expenses are persisted to a
//! Google Sheets spreadsheet through an injected row-store adapter, so the
//! whole app can also run against an in-memory store for local use and tests.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod config;
mod dashboard;
mod endpoints;
mod expense;
mod html;
mod navigation;
mod not_found;
mod routing;
mod store;

pub use app_state::AppState;
pub use config::SheetsConfig;
pub use expense::{CATEGORIES, Expense, RawRow};
pub use routing::build_router;
pub use store::{ExpenseStore, GoogleSheetsStore, InMemoryExpenseStore, UnconfiguredStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The spreadsheet ID or access token was missing from the environment.
    ///
    /// Writes cannot proceed without configuration. Reads degrade to an
    /// empty row list instead of surfacing this error.
    #[error("GOOGLE_SHEET_ID no está definido en las variables de entorno")]
    ConfigurationMissing,

    /// The Google Sheets API rejected a request.
    ///
    /// The message is the remote failure's description. The intake pipeline
    /// surfaces it to the user as-is.
    #[error("{0}")]
    SheetsApi(String),
}
