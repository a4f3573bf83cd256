//! Flat JSON file storage.
//!
//! # Invariants
//! - A missing file reads as "nothing persisted yet", not as an error.
//! - Writes go to a temp file in the target directory which is then renamed
//!   over the target, so readers never observe a half-written document.
//! - Replacing an existing file keeps its permissions; new files get the
//!   process umask defaults.

use super::{RosterStorage, StorageError, StorageResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Conventional roster file name.
pub const DEFAULT_DATA_FILE: &str = "pet_adoption_data.json";

/// Roster storage backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn stage_in(&self, dir: &Path) -> StorageResult<NamedTempFile> {
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let staged = builder.tempfile_in(dir)?;

        match fs::metadata(&self.path) {
            Ok(existing) => staged.as_file().set_permissions(existing.permissions())?,
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(StorageError::Io(err)),
        }
        Ok(staged)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl RosterStorage for JsonFileStorage {
    fn mode(&self) -> &'static str {
        "file"
    }

    fn read_document(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn write_document(&mut self, contents: &str) -> StorageResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut staged = self.stage_in(dir)?;
        staged.write_all(contents.as_bytes())?;
        staged.as_file().sync_all()?;
        staged
            .persist(&self.path)
            .map_err(|err| StorageError::Io(err.error))?;
        Ok(())
    }
}
