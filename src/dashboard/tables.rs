//! Table view for the most recent transactions.

use maud::{Markup, html};

use crate::{
    expense::Expense,
    html::{
        CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

pub(super) const EMPTY_TABLE_MESSAGE: &str = "No hay gastos registrados aún.";

/// Renders the recent transactions table, newest first.
///
/// Shows a single placeholder row when there is nothing to list.
pub(super) fn recent_transactions_table(recent: &[Expense]) -> Markup {
    html! {
        section class="w-full mx-auto mb-8" {
            h3 class="text-xl font-semibold mb-4" { "Últimos Movimientos" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Fecha" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Categoría" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Descripción" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Monto" }
                        }
                    }
                    tbody {
                        @for expense in recent {
                            tr class=(TABLE_ROW_STYLE) {
                                td class={(TABLE_CELL_STYLE) " font-medium"} { (expense.date) }
                                td class=(TABLE_CELL_STYLE) {
                                    span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
                                }
                                td class=(TABLE_CELL_STYLE) {
                                    @if expense.description.is_empty() {
                                        "-"
                                    } @else {
                                        (expense.description)
                                    }
                                }
                                td class={(TABLE_CELL_STYLE) " text-right font-bold"} {
                                    (format_currency(expense.amount))
                                }
                            }
                        }

                        @if recent.is_empty() {
                            tr {
                                td colspan="4" class="px-6 py-12 text-center" {
                                    (EMPTY_TABLE_MESSAGE)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EMPTY_TABLE_MESSAGE, recent_transactions_table};
    use crate::expense::Expense;

    fn expense(description: &str) -> Expense {
        Expense {
            date: "15/1/2024".to_owned(),
            amount: 49.99,
            category: "Alimentación".to_owned(),
            description: description.to_owned(),
        }
    }

    #[test]
    fn renders_expense_rows() {
        let html = recent_transactions_table(&[expense("mercado semanal")]).into_string();

        assert!(html.contains("15/1/2024"));
        assert!(html.contains("Alimentación"));
        assert!(html.contains("mercado semanal"));
        assert!(html.contains("$49.99"));
        assert!(!html.contains(EMPTY_TABLE_MESSAGE));
    }

    #[test]
    fn renders_a_dash_for_an_empty_description() {
        let html = recent_transactions_table(&[expense("")]).into_string();

        assert!(html.contains(">-<"));
    }

    #[test]
    fn renders_the_empty_state_row_with_no_expenses() {
        let html = recent_transactions_table(&[]).into_string();

        assert!(html.contains(EMPTY_TABLE_MESSAGE));
    }
}
