//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the service. Nothing in the
//! core reads environment variables during request handling; binaries read them and hand the raw
//! values to the `*_from_env_value` helpers below.

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::store::{FileNoteStore, MemoryNoteStore, NoteStore};
use crate::{NoteError, NoteResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Which note store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
}

impl FromStr for StoreKind {
    type Err = NoteError;

    fn from_str(s: &str) -> NoteResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "file" => Ok(StoreKind::File),
            other => Err(NoteError::InvalidInput(format!(
                "unknown store kind '{}' (expected 'memory' or 'file')",
                other
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    store_kind: StoreKind,
    note_data_dir: PathBuf,
    default_page_size: u32,
}

impl CoreConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `store_kind` - Which store engine to open
    /// * `note_data_dir` - Root directory for the file store; unused by the memory store
    /// * `default_page_size` - Page size used when a list request does not name one
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidInput` if `default_page_size` is zero or above the maximum.
    pub fn new(
        store_kind: StoreKind,
        note_data_dir: PathBuf,
        default_page_size: u32,
    ) -> NoteResult<Self> {
        if default_page_size == 0 || default_page_size > MAX_PAGE_SIZE {
            return Err(NoteError::InvalidInput(format!(
                "default page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            store_kind,
            note_data_dir,
            default_page_size,
        })
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store_kind
    }

    pub fn note_data_dir(&self) -> &Path {
        &self.note_data_dir
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::StorageDirCreation` if the file store directory cannot be created.
    pub fn open_store(&self) -> NoteResult<Arc<dyn NoteStore>> {
        Ok(match self.store_kind {
            StoreKind::Memory => Arc::new(MemoryNoteStore::new()),
            StoreKind::File => Arc::new(FileNoteStore::open(&self.note_data_dir)?),
        })
    }
}

/// Missing or blank values fall back to the file store.
pub fn store_kind_from_env_value(value: Option<String>) -> NoteResult<StoreKind> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.parse())
        .transpose()
        .map(|kind| kind.unwrap_or(StoreKind::File))
}

/// Missing or blank values fall back to [`DEFAULT_PAGE_SIZE`].
pub fn page_size_from_env_value(value: Option<String>) -> NoteResult<u32> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PAGE_SIZE);
    };
    value
        .parse()
        .map_err(|_| NoteError::InvalidInput(format!("invalid page size '{}'", value)))
}
