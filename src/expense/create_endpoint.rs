//! Defines the endpoint for submitting a new expense.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that tolerates empty and missing fields
// instead of rejecting the request like axum::Form.
use axum_extra::extract::Form;
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState,
    alert::Alert,
    expense::{
        form::{ExpenseFormValues, expense_form_section},
        intake::{REVIEW_FIELDS_MESSAGE, SUCCESS_MESSAGE, SubmissionOutcome, submit},
        validate::FieldErrors,
    },
    store::ExpenseStore,
};

/// The state needed to record an expense.
#[derive(Clone)]
pub struct IntakeState {
    /// The row store expenses are appended to.
    pub store: Arc<dyn ExpenseStore>,
}

impl FromRef<AppState> for IntakeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for recording a new expense.
///
/// Always responds with the re-rendered form section: cleared with a success
/// alert on success, re-populated with the submitted values on failure.
pub async fn create_expense_endpoint(
    State(state): State<IntakeState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let echo = form.clone();

    match submit(form, state.store.as_ref()).await {
        SubmissionOutcome::Success => {
            let today = OffsetDateTime::now_utc().date().to_string();
            let values = ExpenseFormValues::fresh(&today);
            let feedback = Alert::success(SUCCESS_MESSAGE).into_html();

            expense_form_section(&values, Some(feedback)).into_response()
        }
        SubmissionOutcome::ValidationFailed(errors) => {
            let values = ExpenseFormValues::from_fields(&errors.fields);

            expense_form_section(&values, Some(validation_feedback(&errors))).into_response()
        }
        SubmissionOutcome::PersistenceFailed { message } => {
            // Keep what the user typed so they can resubmit as-is.
            let values = ExpenseFormValues::from_fields(&echo);
            let feedback = Alert::error(&message, "").into_html();

            expense_form_section(&values, Some(feedback)).into_response()
        }
    }
}

/// An error alert followed by the ordered list of validation issues.
fn validation_feedback(errors: &FieldErrors) -> Markup {
    html!(
        (Alert::error(REVIEW_FIELDS_MESSAGE, "").into_html())

        ul class="mb-4 text-sm text-red-600 dark:text-red-400 list-disc list-inside"
        {
            @for issue in &errors.issues {
                li { (issue) }
            }
        }
    )
}
