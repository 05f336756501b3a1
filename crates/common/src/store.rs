//! A keyed, file backed store of scanned contracts.
//!
//! Every record lives in its own `oru-contract-{id}.json` file inside the store directory.

use crate::{errors::FsPathError, fs};
use oru_core::{ContractRecord, NewContract};
use std::path::{Path, PathBuf};

/// File name prefix of every stored record.
pub const RECORD_PREFIX: &str = "oru-contract-";

const RECORD_EXTENSION: &str = ".json";

/// Errors returned by [`ContractStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Fs(#[from] FsPathError),
    #[error("invalid contract id {0:?}")]
    InvalidId(String),
}

type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Saves, loads and lists [`ContractRecord`]s in a directory.
#[derive(Clone, Debug)]
pub struct ContractStore {
    dir: PathBuf,
}

impl ContractStore {
    /// Creates a store rooted at `dir`. The directory is created on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file a record with `id` is stored in.
    pub fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{RECORD_PREFIX}{id}{RECORD_EXTENSION}"))
    }

    /// Assigns an id to `contract` and writes it to disk.
    ///
    /// Ids are the current Unix time in milliseconds, bumped until no record uses them.
    pub fn save(&self, contract: NewContract) -> Result<ContractRecord> {
        fs::create_dir_all(&self.dir)?;

        let mut id = chrono::Utc::now().timestamp_millis();
        while self.record_path(&id.to_string()).exists() {
            id += 1;
        }

        let record = contract.into_record(id.to_string());
        let path = self.record_path(&record.id);
        fs::write_json_file(&path, &record)?;
        debug!(id = %record.id, ?path, items = record.abi.len(), "saved contract");
        Ok(record)
    }

    /// Loads the record with `id`, or `None` if there is none.
    pub fn load(&self, id: &str) -> Result<Option<ContractRecord>> {
        let path = self.record_path(validate_id(id)?);
        if !path.is_file() {
            trace!(?path, "no such record");
            return Ok(None);
        }
        Ok(Some(fs::read_json_file(&path)?))
    }

    /// Returns all stored records, newest first.
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn list(&self) -> Result<Vec<ContractRecord>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry.map_err(|err| FsPathError::read_dir(err, &self.dir))?;
            let path = entry.path();
            let is_record = path.file_name().and_then(|name| name.to_str()).is_some_and(|name| {
                name.starts_with(RECORD_PREFIX) && name.ends_with(RECORD_EXTENSION)
            });
            if !is_record {
                continue;
            }
            match fs::read_json_file::<ContractRecord>(&path) {
                Ok(record) => records.push(record),
                Err(err) => warn!(%err, "skipping unreadable contract record"),
            }
        }

        records.sort_by(|a, b| sort_key(&b.id).cmp(&sort_key(&a.id)));
        Ok(records)
    }

    /// Deletes the record with `id`. Returns `false` if there was nothing to delete.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let path = self.record_path(validate_id(id)?);
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        debug!(%id, "removed contract");
        Ok(true)
    }
}

/// Rejects ids that would escape the store directory.
fn validate_id(id: &str) -> Result<&str> {
    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(StoreError::InvalidId(id.to_string()));
    }
    Ok(id)
}

/// Numeric ids compare by value and above anything that is not a number.
fn sort_key(id: &str) -> (Option<u64>, &str) {
    (id.parse().ok(), id)
}
