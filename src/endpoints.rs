//! The API endpoint URIs.

/// The root route, which shows the expense form.
pub const ROOT: &str = "/";
/// The page showing the expense summary dashboard.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route for submitting a new expense.
pub const EXPENSES_API: &str = "/api/gastos";
/// The route for static files.
pub const STATIC: &str = "/static";
