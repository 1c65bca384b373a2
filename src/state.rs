use std::sync::Arc;

use crate::store::Store;

/// Shared application state injected into every handler. The store sits behind
/// a trait object so handler logic stays independent of the backing store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}
