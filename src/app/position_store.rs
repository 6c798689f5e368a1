// SPDX-License-Identifier: MPL-2.0
//! Persisted position storage using CBOR format.
//!
//! Each screen keeps its "where the user was" scalars (scroll index and
//! offset for the gallery, current page for the slider) in a small
//! key-to-integer map that survives restarts. The map is transient state,
//! not user-configurable, so it lives next to other application state in
//! the data directory rather than in `settings.toml`.
//!
//! Stores are scoped per screen: every scope gets its own CBOR file, so the
//! gallery and the slider never rewrite each other's values.
//!
//! # Path Resolution
//!
//! The store location can be customized for testing or portable deployments:
//! 1. Use `open_from()` with an explicit base directory override
//! 2. Set `ICED_GALLERY_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory

use super::paths;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Key→integer persistence injected into each controller.
///
/// The store is a passive backing: controllers write through on every
/// position update and read it exactly once, at construction.
pub trait PositionStore {
    /// Returns the stored value for `key`, if one was ever saved.
    fn load(&self, key: &str) -> Option<i64>;

    /// Stores `value` under `key`. Last write wins.
    fn save(&mut self, key: &str, value: i64);
}

/// File-backed [`PositionStore`] with one CBOR file per scope.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePositionStore {
    scope: String,
    base_dir: Option<PathBuf>,
    values: BTreeMap<String, i64>,
}

impl FilePositionStore {
    /// Opens the store for `scope` at the default location.
    ///
    /// Returns a tuple of (store, optional warning). A missing file is the
    /// normal first-run case and produces no warning; an unreadable or
    /// corrupt file degrades to an empty store with a warning key suitable
    /// for the notification line.
    pub fn open(scope: &str) -> (Self, Option<String>) {
        Self::open_from(scope, None)
    }

    /// Opens the store for `scope` under a custom base directory.
    pub fn open_from(scope: &str, base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let mut store = Self {
            scope: scope.to_string(),
            base_dir,
            values: BTreeMap::new(),
        };

        let Some(path) = store.file_path() else {
            return (store, None);
        };

        if !path.exists() {
            return (store, None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(values) => {
                        store.values = values;
                        (store, None)
                    }
                    Err(_) => (store, Some("notification-positions-parse-error".to_string())),
                }
            }
            Err(_) => (store, Some("notification-positions-read-error".to_string())),
        }
    }

    /// Returns the full path of this scope's CBOR file.
    fn file_path(&self) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(self.base_dir.clone()).map(|mut path| {
            path.push(format!("positions-{}.cbor", self.scope));
            path
        })
    }

    /// Writes the current map to disk, creating parent directories as needed.
    fn persist(&self) -> Option<String> {
        let Some(path) = self.file_path() else {
            return Some("notification-positions-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-positions-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(&self.values, writer).is_err() {
                    return Some("notification-positions-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-positions-create-error".to_string()),
        }
    }
}

impl PositionStore for FilePositionStore {
    fn load(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn save(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
        if let Some(warning) = self.persist() {
            // A failed write must never take the UI down; the position is
            // still live in memory for the rest of the session.
            eprintln!("Failed to persist positions ({}): {}", self.scope, warning);
        }
    }
}

/// In-memory [`PositionStore`] for unit tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPositionStore {
    values: BTreeMap<String, i64>,
}

impl MemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionStore for MemoryPositionStore {
    fn load(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn save(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }
}
