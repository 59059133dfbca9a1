//! The intake pipeline: validation, date normalization and the write to the
//! row store.

use std::collections::HashMap;

use time::Date;

use crate::{
    expense::{
        model::Expense,
        validate::{FieldErrors, validate},
    },
    store::ExpenseStore,
};

/// The message shown when an expense is recorded.
pub(super) const SUCCESS_MESSAGE: &str = "Gasto registrado correctamente";
/// The message shown above the issue list when validation fails.
pub(super) const REVIEW_FIELDS_MESSAGE: &str = "Por favor revisa los campos.";
/// Fallback for a row-store failure that carries no description.
const UNKNOWN_STORE_ERROR: &str = "Error desconocido al conectar con Google Sheets";

/// The result of one submission attempt.
#[derive(Debug, PartialEq)]
pub(super) enum SubmissionOutcome {
    /// The expense was validated and appended to the row store.
    Success,
    /// Validation failed; nothing was written.
    ValidationFailed(FieldErrors),
    /// The row store rejected the append.
    PersistenceFailed {
        /// A user-facing message derived from the underlying failure.
        message: String,
    },
}

/// Formats a date the way the spreadsheet displays it: day/month/year
/// without zero padding, e.g. `15/1/2024`.
pub(super) fn format_display_date(date: Date) -> String {
    format!("{}/{}/{}", date.day(), u8::from(date.month()), date.year())
}

/// Validate `input` and append the resulting record to `store`.
///
/// The date is reformatted into its display form exactly once, after
/// validation and before the write, so validation stays independent of
/// display formatting. A failed append is final for this submission; the
/// caller decides whether to resubmit, and a retry may duplicate a row that
/// was written before the failure surfaced.
pub(super) async fn submit(
    input: HashMap<String, String>,
    store: &dyn ExpenseStore,
) -> SubmissionOutcome {
    let validated = match validate(&input) {
        Ok(validated) => validated,
        Err(errors) => return SubmissionOutcome::ValidationFailed(errors),
    };

    let expense = Expense {
        date: format_display_date(validated.date),
        amount: validated.amount,
        category: validated.category,
        description: validated.description,
    };

    match store.append_row(&expense).await {
        Ok(()) => SubmissionOutcome::Success,
        Err(error) => {
            tracing::error!("could not append expense to the row store: {error}");

            let mut description = error.to_string();
            if description.is_empty() {
                description = UNKNOWN_STORE_ERROR.to_owned();
            }

            SubmissionOutcome::PersistenceFailed {
                message: format!("Error: {description}"),
            }
        }
    }
}
