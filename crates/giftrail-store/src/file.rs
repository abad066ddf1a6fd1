//! File-backed key-value store.
//!
//! One file per key under a data directory. Used where a real durable
//! medium is wanted (desktop shells, integration environments) and as the
//! substitutable durable backend in tests.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use giftrail_types::{GiftrailError, Result};

use crate::KvStore;

/// Durable store writing each key to `<dir>/<sanitized-key>.kv`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| GiftrailError::StoreUnavailable {
            reason: format!("cannot create data dir {}: {err}", dir.display()),
        })?;
        tracing::info!(dir = %dir.display(), "File store opened");
        Ok(Self { dir })
    }

    /// Data directory this store writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are store-internal names, but keep the mapping safe for any
        // filesystem: everything outside [A-Za-z0-9._-] becomes '_'.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.kv"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(GiftrailError::StoreRead {
                key: key.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value).map_err(|err| GiftrailError::StoreWrite {
            key: key.to_string(),
            reason: err.to_string(),
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(GiftrailError::StoreWrite {
                key: key.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}
