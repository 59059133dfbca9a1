//! Dashboard module
//!
//! Provides an overview page with summary cards, charts and the latest
//! recorded expenses.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
