//! The row-store adapter: the trait the intake pipeline and the dashboard
//! depend on, plus its Google Sheets and in-memory implementations.

mod memory;
mod sheets;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    Error,
    expense::{Expense, RawRow},
};

pub use memory::{FailingExpenseStore, InMemoryExpenseStore};
pub use sheets::GoogleSheetsStore;

/// Handles appending and listing expense rows.
///
/// Append idempotency is not guaranteed: a network failure after the row was
/// actually written is indistinguishable from one before it, so a retried
/// submission may produce a duplicate row. That is accepted.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Append one expense as a new row after the existing rows.
    async fn append_row(&self, expense: &Expense) -> Result<(), Error>;

    /// List every expense row in store order (append order in practice).
    async fn list_rows(&self) -> Result<Vec<Expense>, Error>;
}

/// Loads all expenses, degrading to no data on any read error.
///
/// The dashboard renders an empty summary rather than an error page when the
/// store is unreachable, so read failures are logged and swallowed here.
/// This is the single place that policy lives.
pub(crate) async fn load_expenses_or_empty(store: &dyn ExpenseStore) -> Vec<Expense> {
    match store.list_rows().await {
        Ok(expenses) => expenses,
        Err(error) => {
            tracing::error!("could not read expenses from the row store: {error}");
            Vec::new()
        }
    }
}

/// The store used when the spreadsheet environment variables are absent.
///
/// Reads degrade to an empty row list; writes fail with the configuration
/// error so the form can tell the user what is wrong.
pub struct UnconfiguredStore;

#[async_trait]
impl ExpenseStore for UnconfiguredStore {
    async fn append_row(&self, _expense: &Expense) -> Result<(), Error> {
        Err(Error::ConfigurationMissing)
    }

    async fn list_rows(&self) -> Result<Vec<Expense>, Error> {
        Ok(Vec::new())
    }
}

/// Converts a raw cell grid into header-keyed rows.
///
/// The first row is the header. Cells beyond the header width are dropped
/// and missing trailing cells are absent from the map, which the record
/// coercion then defaults.
pub(crate) fn raw_rows(values: Vec<Vec<String>>) -> Vec<RawRow> {
    let mut rows = values.into_iter();

    let Some(header) = rows.next() else {
        return Vec::new();
    };

    rows.map(|cells| {
        header
            .iter()
            .cloned()
            .zip(cells)
            .collect::<HashMap<_, _>>()
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        ExpenseStore, FailingExpenseStore, UnconfiguredStore, load_expenses_or_empty, raw_rows,
    };
    use crate::{Error, expense::Expense};

    fn cells(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn raw_rows_keys_cells_by_header() {
        let rows = raw_rows(cells(&[
            &["Fecha", "Categoría", "Monto", "Descripción"],
            &["15/1/2024", "Ocio", "12.5", "cine"],
        ]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Fecha"], "15/1/2024");
        assert_eq!(rows[0]["Monto"], "12.5");
    }

    #[test]
    fn raw_rows_handles_an_empty_grid() {
        assert!(raw_rows(Vec::new()).is_empty());
    }

    #[test]
    fn raw_rows_handles_a_header_only_grid() {
        let rows = raw_rows(cells(&[&["Fecha", "Categoría", "Monto", "Descripción"]]));

        assert!(rows.is_empty());
    }

    #[test]
    fn raw_rows_drops_missing_trailing_cells() {
        let rows = raw_rows(cells(&[
            &["Fecha", "Categoría", "Monto", "Descripción"],
            &["15/1/2024", "Ocio"],
        ]));

        assert_eq!(rows[0].get("Monto"), None);
    }

    #[tokio::test]
    async fn unconfigured_store_fails_writes_with_the_configuration_error() {
        let expense = Expense {
            date: "15/1/2024".to_owned(),
            amount: 10.0,
            category: "Ocio".to_owned(),
            description: "".to_owned(),
        };

        let result = UnconfiguredStore.append_row(&expense).await;

        assert_eq!(result, Err(Error::ConfigurationMissing));
    }

    #[tokio::test]
    async fn unconfigured_store_reads_as_empty() {
        assert_eq!(UnconfiguredStore.list_rows().await, Ok(Vec::new()));
    }

    // The degrade-to-empty-on-read-error policy is deliberate: a dashboard
    // with no data beats a broken dashboard.
    #[tokio::test]
    async fn read_errors_degrade_to_no_data() {
        let expenses = load_expenses_or_empty(&FailingExpenseStore).await;

        assert!(expenses.is_empty());
    }
}
