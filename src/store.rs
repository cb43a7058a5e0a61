use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;

use crate::error::StorageError;

/// Key-value blob store shared by every page context. Reads absorb failures
/// (callers fall back to defaults); writes surface them.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let store = Store {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = Store {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Open the store at its usual place in the platform data directory,
    /// creating directories as needed.
    pub fn open_default() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        let app_dir = data_dir.join("healing-hands");
        std::fs::create_dir_all(&app_dir)?;
        Self::open(app_dir.join("salon.db"))
    }

    fn initialize(&self) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;

        conn.execute_batch(
            "
            -- One row per persisted blob
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            ",
        )?;

        Ok(())
    }

    /// Raw blob under `key`, or `None` when missing. Read failures are
    /// logged and reported as absent, never as errors.
    pub fn read(&self, key: &str) -> Option<String> {
        let conn = match self.conn.lock() {
            Ok(conn) => conn,
            Err(_) => {
                log::warn!("store lock poisoned, treating {key} as absent");
                return None;
            }
        };

        match conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        }) {
            Ok(value) => Some(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => {
                log::warn!("failed to read {key}: {e}");
                None
            }
        }
    }

    pub fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;

        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, value],
        )?;

        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;

        conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;

        Ok(())
    }

    /// Deserialized blob under `key`. Malformed stored content is logged and
    /// treated as absent so callers fall back to defaults.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("stored {key} is malformed, treating as absent: {e}");
                None
            }
        }
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.write(key, &json)
    }
}
