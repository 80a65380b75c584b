//! Shared application state for all routes.

use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// One store handle for the whole process, shared by every in-flight request.
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        AppState { store }
    }
}
