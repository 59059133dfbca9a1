//! Expense recording: the canonical record model, the validator, the intake
//! pipeline, and the form page and submission endpoint.

mod create_endpoint;
mod form;
mod intake;
mod model;
mod new_expense_page;
mod validate;

pub use create_endpoint::create_expense_endpoint;
pub use model::{CATEGORIES, COLUMN_HEADERS, Expense, RawRow};
pub use new_expense_page::get_expense_form_page;
