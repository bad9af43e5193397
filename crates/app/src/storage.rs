//! Local storage management
//!
//! The storefront keeps a small amount of client-side state between runs: the
//! cart, the favorites list and the applied vouchers. Each entry is one JSON
//! document under a well-known key, written synchronously on every mutation.
//! Last writer wins; concurrent processes do not observe each other.

use std::{
    fmt::{self, Display, Formatter},
    fs, io,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// The well-known client-side storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The cart contents.
    Cart,

    /// The favorited product ids.
    Favorites,

    /// The applied voucher slots.
    AppliedVoucher,
}

impl StoreKey {
    /// The key as written to disk. Spellings match the web storefront's
    /// local storage entries, `appliedVoucher` included.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Favorites => "favorites",
            Self::AppliedVoucher => "appliedVoucher",
        }
    }
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by a local store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading an entry failed for a reason other than absence.
    #[error("failed to read the {key} entry")]
    Read {
        /// The entry being read.
        key: StoreKey,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing an entry failed.
    #[error("failed to write the {key} entry")]
    Write {
        /// The entry being written.
        key: StoreKey,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Removing an entry failed.
    #[error("failed to remove the {key} entry")]
    Remove {
        /// The entry being removed.
        key: StoreKey,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// A synchronous key-value store for client-side state.
///
/// Mirrors the browser's local storage contract: string values under string
/// keys, absent reads return `None`, writes replace wholesale.
pub trait KeyValueStore: Send + Sync {
    /// Read the entry under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the entry exists but cannot be read.
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError>;

    /// Replace the entry under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the entry cannot be written.
    fn write(&self, key: StoreKey, value: &str) -> Result<(), StorageError>;

    /// Remove the entry under `key`. Removing an absent entry is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the entry cannot be removed.
    fn remove(&self, key: StoreKey) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` document per entry in a data
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, io::Error> {
        let dir = dir.into();

        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { key, source }),
        }
    }

    fn write(&self, key: StoreKey, value: &str) -> Result<(), StorageError> {
        fs::write(self.path(key), value).map_err(|source| StorageError::Write { key, source })
    }

    fn remove(&self, key: StoreKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove { key, source }),
        }
    }
}

/// In-memory store used by tests and anywhere persistence is unwanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<&'static str, String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(key.as_str()).cloned())
    }

    fn write(&self, key: StoreKey, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries.insert(key.as_str(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries.remove(key.as_str());

        Ok(())
    }
}
