//! Shared helpers for handler tests.

use std::sync::Arc;

use actix_web::web;

use crate::domain::RecordsService;
use crate::domain::ports::InMemoryStore;
use crate::inbound::http::state::HttpState;

/// Handler state backed by a fresh in-memory store.
pub fn in_memory_state() -> web::Data<HttpState> {
    let records = Arc::new(RecordsService::new(Arc::new(InMemoryStore::new())));
    web::Data::new(HttpState::new(records))
}
