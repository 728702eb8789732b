//! Persistence adapters for the collection store port.

mod json_store;

pub use json_store::JsonFileStore;
