//! API server state

use std::sync::Arc;

use crate::storage::UserStore;

/// API server state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Shared user store
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
