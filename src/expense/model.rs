//! The canonical expense record and its spreadsheet row representation.

use std::collections::HashMap;

/// The column headers of the expense sheet, in wire order.
pub const COLUMN_HEADERS: [&str; 4] = ["Fecha", "Categoría", "Monto", "Descripción"];

/// The categories offered by the expense form.
///
/// The validator does not enforce this set. Any non-empty category is
/// accepted so that rows written by other spreadsheet clients still
/// aggregate.
pub const CATEGORIES: [&str; 9] = [
    "Alimentación",
    "Transporte",
    "Vivienda",
    "Ocio",
    "Salud",
    "Educación",
    "Ropa",
    "Ahorro",
    "Otros",
];

/// A row read back from the row store, keyed by column header.
pub type RawRow = HashMap<String, String>;

/// A recorded expense.
///
/// The date is kept in its display form, exactly as written to the sheet.
/// Records have no identifier; append order is the only ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The date the expense occurred, as a day/month/year display string.
    pub date: String,
    /// The amount spent in dollars.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: String,
    /// Free text describing the expense. Empty when the user left it blank.
    pub description: String,
}

impl Expense {
    /// Coerce a raw spreadsheet row into an expense record.
    ///
    /// Missing cells default to the empty string and an unparsable amount
    /// defaults to 0, since rows edited outside this app can hold anything.
    pub fn from_raw(row: &RawRow) -> Self {
        let [fecha, categoria, monto, descripcion] = COLUMN_HEADERS;
        let cell = |header: &str| row.get(header).cloned().unwrap_or_default();

        Self {
            date: cell(fecha),
            category: cell(categoria),
            amount: cell(monto).trim().parse().unwrap_or(0.0),
            description: cell(descripcion),
        }
    }

    /// The expense as spreadsheet cells, in [COLUMN_HEADERS] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.category.clone(),
            self.amount.to_string(),
            self.description.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{COLUMN_HEADERS, Expense, RawRow};

    fn raw_row(date: &str, category: &str, amount: &str, description: &str) -> RawRow {
        let [fecha, categoria, monto, descripcion] = COLUMN_HEADERS;

        RawRow::from([
            (fecha.to_owned(), date.to_owned()),
            (categoria.to_owned(), category.to_owned()),
            (monto.to_owned(), amount.to_owned()),
            (descripcion.to_owned(), description.to_owned()),
        ])
    }

    #[test]
    fn from_raw_coerces_amount() {
        let expense = Expense::from_raw(&raw_row("15/1/2024", "Alimentación", "49.99", "mercado"));

        assert_eq!(expense.amount, 49.99);
        assert_eq!(expense.date, "15/1/2024");
        assert_eq!(expense.category, "Alimentación");
        assert_eq!(expense.description, "mercado");
    }

    #[test]
    fn from_raw_defaults_unparsable_amount_to_zero() {
        let expense = Expense::from_raw(&raw_row("15/1/2024", "Ocio", "no es un número", ""));

        assert_eq!(expense.amount, 0.0);
    }

    #[test]
    fn from_raw_defaults_missing_cells() {
        let expense = Expense::from_raw(&RawRow::new());

        assert_eq!(expense.date, "");
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.category, "");
        assert_eq!(expense.description, "");
    }

    #[test]
    fn to_row_matches_column_order() {
        let expense = Expense {
            date: "15/1/2024".to_owned(),
            amount: 49.99,
            category: "Alimentación".to_owned(),
            description: "mercado".to_owned(),
        };

        assert_eq!(
            expense.to_row(),
            vec!["15/1/2024", "Alimentación", "49.99", "mercado"]
        );
    }
}
