//! Record file storage with XDG path support.
//!
//! Records are stored as JSON at `~/.local/share/dfq/records.json` by default.
//! The file may hold either a bare array of records or an object with a
//! `records` array.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::record::{Record, RecordSet};

/// Default records filename.
const RECORDS_FILENAME: &str = "records.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "dfq";

/// Errors that can occur during record storage operations.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// Failed to determine XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read records file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, RecordStoreError>;

/// Both on-disk layouts accepted by [`RecordStore::load`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsFile {
    Bare(Vec<Record>),
    Wrapped(RecordSet),
}

impl From<RecordsFile> for RecordSet {
    fn from(file: RecordsFile) -> Self {
        match file {
            RecordsFile::Bare(records) => RecordSet::new(records),
            RecordsFile::Wrapped(set) => set,
        }
    }
}

/// Persistent storage for a record set.
///
/// # Example
///
/// ```no_run
/// use datefilter_rs::RecordStore;
///
/// let store = RecordStore::new()?;
/// let records = store.load()?;
/// let matches = records.filter_by_date("ge2013-03-14").unwrap();
/// println!("{} matching records", matches.len());
/// # Ok::<(), datefilter_rs::RecordStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Path to the records file.
    path: PathBuf,
}

impl RecordStore {
    /// Creates a new `RecordStore` with the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `RecordStore` with a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default XDG data path for the records file.
    ///
    /// On Unix: `~/.local/share/dfq/records.json`
    /// On macOS: `~/Library/Application Support/dfq/records.json`
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(RecordStoreError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(RECORDS_FILENAME))
    }

    /// Returns the path to the records file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the record set from disk.
    ///
    /// # Errors
    ///
    /// - Returns `RecordStoreError::ReadError` if the file cannot be read.
    /// - Returns `RecordStoreError::Json` if the file is not a valid record set.
    pub fn load(&self) -> Result<RecordSet> {
        let contents = fs::read_to_string(&self.path).map_err(|e| RecordStoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let file: RecordsFile = serde_json::from_str(&contents)?;
        let set = RecordSet::from(file);
        debug!(path = %self.path.display(), records = set.len(), "loaded records");
        Ok(set)
    }

    /// Returns true if the records file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
