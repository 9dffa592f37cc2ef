//! JSON persistence for the listing set and the active review record.
//!
//! Two documents, both overwritten whole on every write: the scraped
//! listing array and the single review record of the currently selected
//! listing. There is no append path and no schema versioning; a malformed
//! file fails the whole read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stayscout_common::{Listing, ReviewRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// File-backed store for one session's persisted state.
pub struct JsonStore {
    listings_path: PathBuf,
    review_path: PathBuf,
}

impl JsonStore {
    pub fn new(listings_path: impl Into<PathBuf>, review_path: impl Into<PathBuf>) -> Self {
        Self {
            listings_path: listings_path.into(),
            review_path: review_path.into(),
        }
    }

    /// Serialise the ordered listing sequence, replacing any prior file.
    pub fn save_listings(&self, listings: &[Listing]) -> Result<(), StoreError> {
        write_json(&self.listings_path, listings)?;
        tracing::debug!(
            target: "store",
            path = %self.listings_path.display(),
            count = listings.len(),
            "listings saved"
        );
        Ok(())
    }

    /// Deserialise the listing sequence in its original order.
    pub fn load_listings(&self) -> Result<Vec<Listing>, StoreError> {
        read_json(&self.listings_path)
    }

    /// Persist the active review record, replacing any prior one.
    pub fn save_review(&self, record: &ReviewRecord) -> Result<(), StoreError> {
        write_json(&self.review_path, record)?;
        tracing::debug!(
            target: "store",
            path = %self.review_path.display(),
            listing = %record.name,
            "review record saved"
        );
        Ok(())
    }

    /// Load the active review record.
    pub fn load_review(&self) -> Result<ReviewRecord, StoreError> {
        read_json(&self.review_path)
    }
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|source| StoreError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = fs::read(path).map_err(|source| StoreError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
