use crate::core::Storage;
use crate::utils::error::{AmalgamError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(name);
        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AmalgamError::ResourceNotFound {
                name: name.to_string(),
                path: full_path,
            },
            _ => AmalgamError::IoError(e),
        })
    }

    /// Writes a sibling temp file, syncs it, then renames it over `name`.
    /// The temp file is removed if anything fails before the rename.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(name);
        let write_failure = |source| AmalgamError::WriteFailure {
            path: full_path.clone(),
            source,
        };

        let dir = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(write_failure)?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(write_failure)?;
        temp.write_all(data).map_err(write_failure)?;
        temp.as_file().sync_all().map_err(write_failure)?;
        temp.persist(&full_path).map_err(|e| write_failure(e.error))?;

        tracing::debug!("Persisted {}", full_path.display());
        Ok(())
    }

    fn resolve(&self, name: &str) -> PathBuf {
        Path::new(&self.base_path).join(name)
    }
}
