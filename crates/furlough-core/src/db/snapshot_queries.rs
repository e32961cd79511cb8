//! Snapshot row queries.

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SNAPSHOT_SQL: &str = "SELECT value FROM snapshots WHERE key = ?1";
const UPSERT_SNAPSHOT_SQL: &str = "INSERT INTO snapshots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM snapshots WHERE key = ?1";

impl super::Database {
    /// Retrieves the snapshot stored under `key`.
    pub fn get_snapshot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SNAPSHOT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query snapshot")
    }

    /// Stores `value` under `key`, replacing any previous snapshot.
    pub fn put_snapshot(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(UPSERT_SNAPSHOT_SQL, params![key, value, &now])
            .db_context("Failed to write snapshot")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Saved snapshot '{key}' ({} bytes)", value.len());
        Ok(())
    }

    /// When the snapshot under `key` was last written.
    pub fn snapshot_updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query snapshot timestamp")?;

        Ok(raw.and_then(|text| match text.parse::<Timestamp>() {
            Ok(timestamp) => Some(timestamp),
            Err(e) => {
                warn!("Ignoring updated_at '{text}' of snapshot '{key}': {e}");
                None
            }
        }))
    }
}
