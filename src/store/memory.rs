//! Implements the expense store with in-memory data.
//!
//! Note: this is compiled even in the "production" version of this app so
//! that the whole app can run, top-to-bottom, without a Google spreadsheet.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{
    Error,
    expense::{COLUMN_HEADERS, Expense},
    store::{ExpenseStore, raw_rows},
};

/// An expense store that keeps its rows in memory as raw cells.
///
/// Rows pass through the same header and coercion path as the spreadsheet
/// store, so what tests observe is what the real store would produce.
#[derive(Default)]
pub struct InMemoryExpenseStore {
    cells: Mutex<Vec<Vec<String>>>,
}

impl InMemoryExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_cells(&self) -> Result<MutexGuard<'_, Vec<Vec<String>>>, Error> {
        self.cells
            .lock()
            .map_err(|_| Error::SheetsApi("el almacén en memoria no está disponible".to_owned()))
    }
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn append_row(&self, expense: &Expense) -> Result<(), Error> {
        let mut cells = self.lock_cells()?;

        if cells.is_empty() {
            cells.push(COLUMN_HEADERS.iter().map(|header| header.to_string()).collect());
        }

        cells.push(expense.to_row());

        Ok(())
    }

    async fn list_rows(&self) -> Result<Vec<Expense>, Error> {
        let cells = self.lock_cells()?;

        Ok(raw_rows(cells.clone()).iter().map(Expense::from_raw).collect())
    }
}

/// An expense store that rejects every operation.
///
/// Used to exercise the failure paths: persistence errors on the form and
/// the degrade-to-empty policy on the dashboard.
pub struct FailingExpenseStore;

#[async_trait]
impl ExpenseStore for FailingExpenseStore {
    async fn append_row(&self, _expense: &Expense) -> Result<(), Error> {
        Err(Error::SheetsApi(
            "la API de Google Sheets rechazó la solicitud".to_owned(),
        ))
    }

    async fn list_rows(&self) -> Result<Vec<Expense>, Error> {
        Err(Error::SheetsApi(
            "la API de Google Sheets rechazó la solicitud".to_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryExpenseStore;
    use crate::{expense::Expense, store::ExpenseStore};

    fn expense(date: &str, amount: f64, category: &str) -> Expense {
        Expense {
            date: date.to_owned(),
            amount,
            category: category.to_owned(),
            description: "".to_owned(),
        }
    }

    #[tokio::test]
    async fn appended_rows_are_listed_in_order() {
        let store = InMemoryExpenseStore::new();

        store
            .append_row(&expense("15/1/2024", 49.99, "Alimentación"))
            .await
            .unwrap();
        store
            .append_row(&expense("16/1/2024", 12.5, "Ocio"))
            .await
            .unwrap();

        let rows = store.list_rows().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "15/1/2024");
        assert_eq!(rows[0].amount, 49.99);
        assert_eq!(rows[1].category, "Ocio");
    }

    #[tokio::test]
    async fn listing_an_empty_store_returns_no_rows() {
        let store = InMemoryExpenseStore::new();

        assert!(store.list_rows().await.unwrap().is_empty());
    }
}
