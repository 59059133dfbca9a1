//! Stat cards summarizing total spending, transaction count and the
//! average per transaction.

use maud::{Markup, html};

use crate::{dashboard::aggregation::DashboardSummary, html::format_currency};

/// Renders the row of summary stat cards.
pub(super) fn summary_cards_view(summary: &DashboardSummary) -> Markup {
    html! {
        section class="w-full mx-auto mb-4" {
            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4" {
                (stat_card("Gasto Total", &format_currency(summary.total_spent)))
                (stat_card("Transacciones", &summary.transaction_count.to_string()))
                (stat_card(
                    "Promedio por Gasto",
                    &format_currency(summary.average_per_transaction),
                ))
            }
        }
    }
}

fn stat_card(label: &str, value: &str) -> Markup {
    html! {
        div class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-6 shadow-md" {
            p class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-2" { (label) }
            p class="text-3xl font-bold" { (value) }
        }
    }
}
