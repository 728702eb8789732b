//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service and remain testable against the in-memory
//! store.

use std::sync::Arc;

use crate::domain::RecordsService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case service for all record collections.
    pub records: Arc<RecordsService>,
}

impl HttpState {
    /// Construct state around the records service.
    pub fn new(records: Arc<RecordsService>) -> Self {
        Self { records }
    }
}
