//! Key-value storage backends
//!
//! The dashboard persists everything as string values under a handful of
//! keys. Writes replace the whole value; there is no versioning, so two
//! writers on the same store are last-write-wins.
//!
//! | Key | Value |
//! |-----|-------|
//! | `bookings` | JSON array of `Booking` |
//! | `staffUser` | JSON `{ "name": ... }` |

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use thiserror::Error;

/// Key holding the booking collection
pub const BOOKINGS_KEY: &str = "bookings";

/// Key holding the signed-in staff identity
pub const STAFF_KEY: &str = "staffUser";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// String-valued key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite `key` in a single write
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; missing keys are not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}
