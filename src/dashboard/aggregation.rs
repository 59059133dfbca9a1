//! Expense aggregation for the dashboard.
//!
//! Produces the values behind the stat cards, charts and recent
//! transactions table. Everything here is pure, so the same row list always
//! yields the same summary.

use crate::expense::Expense;

/// How many of the most recent records the dashboard lists.
pub(super) const RECENT_TRANSACTION_COUNT: usize = 5;
/// How many distinct days the daily trend chart shows.
pub(super) const DAILY_TREND_DAYS: usize = 7;

/// The dashboard's summary of every recorded expense.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DashboardSummary {
    /// The sum of every recorded amount.
    pub total_spent: f64,
    /// How many expenses have been recorded.
    pub transaction_count: usize,
    /// `total_spent / transaction_count`, or 0 with no records.
    pub average_per_transaction: f64,
    /// Per-category totals in first-seen order.
    pub category_totals: Vec<(String, f64)>,
    /// Per-day totals for the trend chart, see [daily_totals].
    pub daily_totals: Vec<(String, f64)>,
    /// The most recently appended records, newest first.
    pub recent_transactions: Vec<Expense>,
}

/// Computes the full dashboard summary from the expense rows in store order.
pub(super) fn summarize(expenses: &[Expense]) -> DashboardSummary {
    let total_spent: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let transaction_count = expenses.len();

    // Guard the average against an empty store.
    let average_per_transaction = if transaction_count > 0 {
        total_spent / transaction_count as f64
    } else {
        0.0
    };

    DashboardSummary {
        total_spent,
        transaction_count,
        average_per_transaction,
        category_totals: category_totals(expenses),
        daily_totals: daily_totals(expenses),
        recent_transactions: recent_transactions(expenses),
    }
}

/// Sums amounts per category, keeping categories in the order they first
/// appear in the row list.
fn category_totals(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|entry| entry.0 == expense.category) {
            Some(entry) => entry.1 += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }

    totals
}

/// Sums amounts per date string and keeps the last [DAILY_TREND_DAYS]
/// distinct dates.
///
/// The dates are display-formatted strings and are not parsed back into
/// calendar dates, so the window follows the store's row order (append
/// order in practice), not calendar order.
fn daily_totals(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|entry| entry.0 == expense.date) {
            Some(entry) => entry.1 += expense.amount,
            None => totals.push((expense.date.clone(), expense.amount)),
        }
    }

    let start = totals.len().saturating_sub(DAILY_TREND_DAYS);
    totals.split_off(start)
}

/// The last [RECENT_TRANSACTION_COUNT] records in reverse append order.
fn recent_transactions(expenses: &[Expense]) -> Vec<Expense> {
    expenses
        .iter()
        .rev()
        .take(RECENT_TRANSACTION_COUNT)
        .cloned()
        .collect()
}
