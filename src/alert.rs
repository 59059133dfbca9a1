//! Alert component for displaying success and error messages to users.
//!
//! Submission results from the expense form are rendered through this
//! component so that both outcomes share one look and dismissal-free layout.

use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Success,
    Error,
}

/// An alert message with optional detail text.
pub struct Alert<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details: "",
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    pub fn into_html(self) -> Markup {
        let style = match self.alert_type {
            AlertType::Success => {
                "p-4 mb-4 text-sm rounded-lg text-green-800 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400"
            }
            AlertType::Error => {
                "p-4 mb-4 text-sm rounded-lg text-red-800 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400"
            }
        };

        html!(
            div class=(style) role="alert"
            {
                span class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    " " (self.details)
                }
            }
        )
    }
}
