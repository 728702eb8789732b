//! Port abstraction for collection persistence adapters and their errors.
//!
//! Adapters persist each collection as a whole: a load re-reads the full
//! sequence from the backing store and a save replaces it, preserving the
//! order passed in. The load→validate→save span executed by the records
//! service is NOT atomic across concurrent requests; two writers can load
//! the same base state and the later save wins. Serialising that span
//! (a per-collection lock, or a transactional adapter) belongs behind this
//! port if it is ever needed.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use camino::Utf8PathBuf;
use thiserror::Error;

use crate::domain::{Evaluation, Lecturer, User};

/// Persistence errors raised by collection store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing file could not be read.
    #[error("failed to read collection file '{path}': {message}")]
    Read {
        /// Path of the collection file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The backing file could not be written.
    #[error("failed to write collection file '{path}': {message}")]
    Write {
        /// Path of the collection file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The backing file holds content that does not parse as the collection.
    #[error("collection file '{path}' holds invalid content: {message}")]
    Corrupt {
        /// Path of the collection file.
        path: Utf8PathBuf,
        /// Description of the parse failure.
        message: String,
    },
}

/// Whole-collection persistence port.
///
/// A missing backing store reads as the empty collection; it is created on
/// first save. No caching happens behind this trait: every load consults
/// durable state and every save rewrites it.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Read the full user collection in insertion order.
    async fn load_users(&self) -> Result<Vec<User>, StoreError>;

    /// Replace the user collection with the given sequence.
    async fn save_users(&self, users: &[User]) -> Result<(), StoreError>;

    /// Read the full lecturer collection in insertion order.
    async fn load_lecturers(&self) -> Result<Vec<Lecturer>, StoreError>;

    /// Replace the lecturer collection with the given sequence.
    async fn save_lecturers(&self, lecturers: &[Lecturer]) -> Result<(), StoreError>;

    /// Read the full evaluation collection in insertion order.
    async fn load_evaluations(&self) -> Result<Vec<Evaluation>, StoreError>;

    /// Replace the evaluation collection with the given sequence.
    async fn save_evaluations(&self, evaluations: &[Evaluation]) -> Result<(), StoreError>;
}

/// Deterministic in-memory store for tests and fixtures.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    lecturers: Mutex<Vec<Lecturer>>,
    evaluations: Mutex<Vec<Evaluation>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    collection
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn replace<T: Clone>(collection: &Mutex<Vec<T>>, records: &[T]) {
    *collection.lock().unwrap_or_else(PoisonError::into_inner) = records.to_vec();
}

#[async_trait]
impl CollectionStore for InMemoryStore {
    async fn load_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(read(&self.users))
    }

    async fn save_users(&self, users: &[User]) -> Result<(), StoreError> {
        replace(&self.users, users);
        Ok(())
    }

    async fn load_lecturers(&self) -> Result<Vec<Lecturer>, StoreError> {
        Ok(read(&self.lecturers))
    }

    async fn save_lecturers(&self, lecturers: &[Lecturer]) -> Result<(), StoreError> {
        replace(&self.lecturers, lecturers);
        Ok(())
    }

    async fn load_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        Ok(read(&self.evaluations))
    }

    async fn save_evaluations(&self, evaluations: &[Evaluation]) -> Result<(), StoreError> {
        replace(&self.evaluations, evaluations);
        Ok(())
    }
}
