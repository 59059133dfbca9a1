//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::store::ExpenseStore;

/// The state of the server.
///
/// The row store is injected here rather than constructed inside the
/// handlers, so tests can substitute an in-memory store.
#[derive(Clone)]
pub struct AppState {
    /// The row store that expenses are written to and read from.
    pub store: Arc<dyn ExpenseStore>,
}

impl AppState {
    /// Create a new [AppState] with an injected expense store.
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }
}
