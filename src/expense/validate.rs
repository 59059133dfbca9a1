//! Turns untrusted form input into a validated expense record.
//!
//! Rules are applied independently per field and every violation is
//! collected, so the user sees all problems with a submission at once rather
//! than one at a time.

use std::collections::HashMap;

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The format the HTML date input submits, e.g. `2024-01-15`.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A single validation rule violation with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The date field was empty or missing.
    #[error("La fecha es requerida")]
    RequiredDate,

    /// The date field was present but not a calendar date.
    #[error("La fecha no es válida")]
    InvalidDate,

    /// The amount did not coerce to a finite number.
    #[error("El monto no es un número válido")]
    InvalidAmount,

    /// The amount coerced to a number that is zero or negative.
    #[error("El monto debe ser positivo")]
    NonPositiveAmount,

    /// The category field was empty or missing.
    #[error("Selecciona una categoría")]
    RequiredCategory,
}

/// The structured payload of a failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors {
    /// Every submitted field name mapped to its raw value, so the form can
    /// be re-populated exactly as the user typed it.
    pub fields: HashMap<String, String>,
    /// Every violated rule in field order (date, amount, category).
    pub issues: Vec<Violation>,
}

/// An expense that passed validation but has not been persisted yet.
///
/// The date stays typed here; it is only rendered into its display form by
/// the intake pipeline, right before the write.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    /// The calendar date the expense occurred.
    pub date: Date,
    /// The amount spent in dollars, greater than zero.
    pub amount: f64,
    /// The category the expense belongs to, non-empty.
    pub category: String,
    /// Free text describing the expense, defaulted to empty.
    pub description: String,
}

/// Validate an untrusted field map into an expense record.
///
/// Returns every violation at once; nothing downstream ever sees the raw
/// map on the success path.
pub fn validate(input: &HashMap<String, String>) -> Result<ValidatedExpense, FieldErrors> {
    let field = |name: &str| input.get(name).map(String::as_str).unwrap_or("");

    let mut issues = Vec::new();

    let date = match field("date") {
        "" => {
            issues.push(Violation::RequiredDate);
            None
        }
        raw => match Date::parse(raw, ISO_DATE) {
            Ok(date) => Some(date),
            Err(_) => {
                issues.push(Violation::InvalidDate);
                None
            }
        },
    };

    let amount = match coerce_amount(field("amount")) {
        None => {
            issues.push(Violation::InvalidAmount);
            None
        }
        Some(number) if number <= 0.0 => {
            issues.push(Violation::NonPositiveAmount);
            None
        }
        Some(number) => Some(number),
    };

    let category = match field("category") {
        "" => {
            issues.push(Violation::RequiredCategory);
            None
        }
        name => Some(name.to_owned()),
    };

    match (date, amount, category) {
        (Some(date), Some(amount), Some(category)) if issues.is_empty() => Ok(ValidatedExpense {
            date,
            amount,
            category,
            description: field("description").to_owned(),
        }),
        _ => Err(FieldErrors {
            fields: input.clone(),
            issues,
        }),
    }
}

/// Coerce an amount string to a finite number.
///
/// An empty or missing amount coerces to zero, which the caller reports as
/// non-positive rather than invalid.
fn coerce_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Some(0.0);
    }

    raw.parse::<f64>().ok().filter(|number| number.is_finite())
}
