//! Snapshot persistence.
//!
//! The planner stores its whole state as one serialized record under a
//! string key. [`Storage`] is the seam: [`Database`] keeps records in SQLite,
//! [`MemoryStorage`] keeps them in a map for tests and embedding.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod memory;
pub mod migrations;
pub mod snapshot_queries;

pub use memory::MemoryStorage;

/// Key/value store for serialized snapshots.
pub trait Storage {
    /// Returns the stored value for `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key` in one atomic write.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// When `key` was last saved, for stores that track it.
    fn updated_at(&self, _key: &str) -> Result<Option<Timestamp>> {
        Ok(None)
    }
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory SQLite database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl Storage for Database {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.get_snapshot(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.put_snapshot(key, value)
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        self.snapshot_updated_at(key)
    }
}
