//! On-disk cache of the last successful live fetch for each username.
//!
//! [`CacheStore`] keeps one pretty-printed JSON file per username under
//! `<cache-root>/ghprofile/`. The file holds a `profile` and a `repos` field and
//! nothing else; the username is only encoded in the file name.
//!
//! Writes overwrite unconditionally and take no lock. Two processes writing the
//! same entry at once can interleave, and the last rename wins.
//!
//! [`CACHE_FRESHNESS`] is informational only: [`CacheStore::load`] returns entries
//! of any age.

mod file_name;

pub use file_name::{CACHE_FILE_EXTENSION, cache_file_name};

use crate::error::Error;
use crate::profile::{Bundle, Profile, Repo};
use core::time::Duration;
use directories::BaseDirs;
use ohno::IntoAppError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "     cache";

/// Subdirectory of the cache root that holds our files.
pub const CACHE_DIR_NAME: &str = "ghprofile";

/// How long an entry is nominally considered fresh.
pub const CACHE_FRESHNESS: Duration = Duration::from_secs(30 * 60);

/// Borrowed view of a [`Bundle`] for serialization without cloning.
#[derive(Debug, Serialize)]
struct CacheEntry<'a> {
    profile: &'a Profile,
    repos: &'a [Repo],
}

/// Directory-backed store of per-user [`Bundle`]s.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Create a store whose files live in `<cache_root>/ghprofile`.
    #[must_use]
    pub fn new(cache_root: impl AsRef<Path>) -> Self {
        Self {
            dir: cache_root.as_ref().join(CACHE_DIR_NAME),
        }
    }

    /// Create a store under the platform cache directory.
    ///
    /// On Linux this is `$XDG_CACHE_HOME`, falling back to `$HOME/.cache`.
    pub fn from_env() -> crate::Result<Self> {
        let base = BaseDirs::new().into_app_err("could not determine cache directory")?;
        Ok(Self::new(base.cache_dir()))
    }

    /// Returns the directory holding the cache files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the entry for `username`, creating the cache directory if needed.
    pub fn cache_path_for(&self, username: &str) -> Result<PathBuf, Error> {
        if username.is_empty() {
            return Err(Error::Validation("username is required"));
        }

        fs::create_dir_all(&self.dir).map_err(|source| Error::Io {
            path: self.dir.clone(),
            source,
        })?;

        Ok(self.dir.join(cache_file_name(username)))
    }

    /// Persist `profile` and `repos` as the entry for `username`, replacing any
    /// previous entry.
    pub fn save(&self, username: &str, profile: &Profile, repos: &[Repo]) -> Result<(), Error> {
        let path = self.cache_path_for(username)?;
        let tmp_path = path.with_extension(format!("{CACHE_FILE_EXTENSION}.tmp"));

        let written = write_entry(&tmp_path, &CacheEntry { profile, repos })
            .map_err(|source| Error::Io {
                path: tmp_path.clone(),
                source,
            })
            .and_then(|()| fs::rename(&tmp_path, &path).map_err(|source| Error::Io { path: path.clone(), source }));

        if let Err(e) = written {
            discard_partial(&tmp_path);
            return Err(e);
        }

        log::debug!(target: LOG_TARGET, "Saved {} repositories for '{username}' to '{}'", repos.len(), path.display());
        Ok(())
    }

    /// Load the entry for `username`.
    ///
    /// Fails with [`Error::CacheMiss`] when there is no entry and with
    /// [`Error::Corruption`] when the file can't be parsed.
    pub fn load(&self, username: &str) -> Result<Bundle, Error> {
        let path = self.cache_path_for(username)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(target: LOG_TARGET, "Cache miss for '{username}'");
                return Err(Error::CacheMiss(path));
            }
            Err(source) => return Err(Error::Io { path, source }),
        };

        let bundle: Bundle = serde_json::from_slice(&bytes).map_err(|source| Error::Corruption {
            path: path.clone(),
            source,
        })?;

        log::debug!(target: LOG_TARGET, "Cache hit for '{username}' ({} repositories)", bundle.repos.len());
        Ok(bundle)
    }
}

/// Best-effort removal of a temporary file left behind by a failed save.
fn discard_partial(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => log::debug!(target: LOG_TARGET, "Removed partial cache file '{}'", tmp_path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::debug!(target: LOG_TARGET, "Could not remove partial cache file '{}': {e}", tmp_path.display()),
    }
}

fn write_entry(path: &Path, entry: &CacheEntry<'_>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entry)?;
    writer.flush()
}
