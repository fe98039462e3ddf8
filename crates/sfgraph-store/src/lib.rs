//! # sfgraph-store
//!
//! Reads and writes the JSON files the pipeline stages hand to each other.
//!
//! Every artifact lives at a fixed name inside one data directory. Writes are
//! pretty-printed, replace the whole file, and create the directory on
//! demand. Reads of a file that does not exist fail with
//! [`StoreError::Missing`] so a stage run out of order says which file it
//! was looking for.

mod error;

pub use error::StoreError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use sfgraph_core::artifacts::{ContentHashRecord, SpaceRecord};
use sfgraph_core::entities::Restaurant;
use sfgraph_core::ops::Op;

pub const RESTAURANTS_FILE: &str = "sf_restaurants.json";
pub const OPERATIONS_FILE: &str = "sf_restaurants_triples.json";
pub const CONTENT_HASH_FILE: &str = "ipfs_hashes.json";
pub const SPACE_FILE: &str = "space_id.json";

/// Artifact files under one data directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    data_dir: PathBuf,
}

impl ArtifactStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn restaurants_path(&self) -> PathBuf {
        self.data_dir.join(RESTAURANTS_FILE)
    }

    #[must_use]
    pub fn operations_path(&self) -> PathBuf {
        self.data_dir.join(OPERATIONS_FILE)
    }

    #[must_use]
    pub fn content_hash_path(&self) -> PathBuf {
        self.data_dir.join(CONTENT_HASH_FILE)
    }

    #[must_use]
    pub fn space_path(&self) -> PathBuf {
        self.data_dir.join(SPACE_FILE)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save_restaurants(&self, restaurants: &[Restaurant]) -> Result<PathBuf, StoreError> {
        write_json(&self.restaurants_path(), restaurants)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the file is missing, unreadable, or not a
    /// restaurant array.
    pub fn load_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        read_json(&self.restaurants_path())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save_operations(&self, ops: &[Op]) -> Result<PathBuf, StoreError> {
        write_json(&self.operations_path(), ops)
    }

    /// Load the operation stream as untyped records.
    ///
    /// Records are decoded one at a time by the publisher, so a single bad
    /// entry does not reject the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file is missing, unreadable, or not a
    /// JSON array.
    pub fn load_operation_records(&self) -> Result<Vec<serde_json::Value>, StoreError> {
        read_json(&self.operations_path())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save_content_hash(&self, record: &ContentHashRecord) -> Result<PathBuf, StoreError> {
        write_json(&self.content_hash_path(), record)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the file is missing or malformed.
    pub fn load_content_hash(&self) -> Result<ContentHashRecord, StoreError> {
        read_json(&self.content_hash_path())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save_space(&self, record: &SpaceRecord) -> Result<PathBuf, StoreError> {
        write_json(&self.space_path(), record)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the file is missing or malformed.
    pub fn load_space(&self) -> Result<SpaceRecord, StoreError> {
        read_json(&self.space_path())
    }
}

/// Serialize `value` pretty-printed to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the parent directory cannot be created or
/// the file cannot be written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote artifact");
    Ok(path.to_path_buf())
}

/// Read and deserialize the JSON file at `path`.
///
/// # Errors
///
/// Returns [`StoreError::Missing`] if the file does not exist, otherwise
/// [`StoreError::Io`] or [`StoreError::Json`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
