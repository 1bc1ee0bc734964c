//! Keyed storage backends for draft persistence.
//!
//! The draft engine talks to a process-wide keyed store through the
//! [`StorageBackend`] trait so tests can substitute an in-memory fake for
//! the SQLite-backed production store.

use std::collections::HashMap;

use rusqlite::{params, Connection};

use crate::error::StorageError;

use super::data_dir;

/// A process-wide keyed store of JSON strings.
///
/// The backend is deliberately dumb: string keys to string values, no
/// transactions spanning keys, last write wins per key. Durability is
/// best-effort -- callers absorb failures rather than surfacing them.
pub trait StorageBackend {
    /// Read the value for `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// SQLite-backed keyed store.
///
/// Lives at `~/.config/daybook/drafts.db` with a single `draft_kv` table.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open the store at `~/.config/daybook/drafts.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("drafts.db");
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let backend = Self { conn };
        backend.migrate()?;
        Ok(backend)
    }

    /// Open the store at a specific path (for tests).
    pub fn open_at(path: impl Into<std::path::PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.into();
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let backend = Self { conn };
        backend.migrate()?;
        Ok(backend)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let backend = Self { conn };
        backend.migrate()?;
        Ok(backend)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS draft_kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl StorageBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM draft_kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO draft_kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM draft_kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// In-memory keyed store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value under `key`, bypassing the draft engine. Used by
    /// tests to plant corrupt payloads.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_roundtrip() {
        let mut backend = SqliteBackend::open_memory().unwrap();
        assert_eq!(backend.get("journal:entry:a").unwrap(), None);

        backend.set("journal:entry:a", "{\"x\":1}").unwrap();
        assert_eq!(
            backend.get("journal:entry:a").unwrap().as_deref(),
            Some("{\"x\":1}")
        );

        backend.set("journal:entry:a", "{\"x\":2}").unwrap();
        assert_eq!(
            backend.get("journal:entry:a").unwrap().as_deref(),
            Some("{\"x\":2}")
        );

        backend.remove("journal:entry:a").unwrap();
        assert_eq!(backend.get("journal:entry:a").unwrap(), None);
    }

    #[test]
    fn test_sqlite_remove_absent_key_is_ok() {
        let mut backend = SqliteBackend::open_memory().unwrap();
        assert!(backend.remove("journal:entry:missing").is_ok());
    }

    #[test]
    fn test_keys_do_not_interfere() {
        let mut backend = MemoryBackend::new();
        backend.set("journal:entry:a", "1").unwrap();
        backend.set("journal:entry:b", "2").unwrap();
        backend.remove("journal:entry:a").unwrap();
        assert_eq!(backend.get("journal:entry:b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_sqlite_file_backend_persists() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drafts.db");

        {
            let mut backend = SqliteBackend::open_at(&path).unwrap();
            backend.set("journal:entry:today", "{}").unwrap();
        }

        let backend = SqliteBackend::open_at(&path).unwrap();
        assert_eq!(
            backend.get("journal:entry:today").unwrap().as_deref(),
            Some("{}")
        );
    }
}
