//! Script source files on disk.
//!
//! A [`ScriptStore`] manages one `<name>.sh` file per script inside a fixed
//! base directory. This is a pure filesystem shim: it checks for existence
//! and nothing else. Callers are responsible for any further validation
//! (for example, pre-checking the target of a rename — renaming onto an
//! existing file overwrites it).

use std::path::{Path, PathBuf};

use crate::config::SCRIPT_EXTENSION;
use crate::error::{Error, Result};

pub struct ScriptStore {
    base_dir: PathBuf,
}

impl ScriptStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.{SCRIPT_EXTENSION}"))
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// Creates the source file for a new script, creating the base directory
    /// first if needed.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::AlreadyExists`] if the file exists, or an IO
    /// error if it cannot be written.
    pub fn create(&self, name: &str, contents: &str) -> Result<PathBuf> {
        if self.exists(name) {
            return Err(Error::AlreadyExists(name.to_string()));
        }

        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            Error::io_error(
                "qds directory".to_string(),
                self.base_dir.display().to_string(),
                e,
            )
        })?;

        let path = self.path_for(name);
        std::fs::write(&path, contents)
            .map_err(|e| Error::io_error("script".to_string(), path.display().to_string(), e))?;

        Ok(path)
    }

    /// Returns the raw contents of the named script.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ScriptNotFound`] if the file is absent.
    pub fn read(&self, name: &str) -> Result<String> {
        if !self.exists(name) {
            return Err(Error::ScriptNotFound(name.to_string()));
        }

        let path = self.path_for(name);
        std::fs::read_to_string(&path)
            .map_err(|e| Error::io_error("script".to_string(), path.display().to_string(), e))
    }

    /// Removes the named script's source file.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ScriptNotFound`] if the file is absent.
    pub fn delete(&self, name: &str) -> Result<()> {
        if !self.exists(name) {
            return Err(Error::ScriptNotFound(name.to_string()));
        }

        let path = self.path_for(name);
        std::fs::remove_file(&path)
            .map_err(|e| Error::io_error("script".to_string(), path.display().to_string(), e))
    }

    /// Moves the source file of `old_name` to `new_name`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ScriptNotFound`] if the old file is absent.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<()> {
        if !self.exists(old_name) {
            return Err(Error::ScriptNotFound(old_name.to_string()));
        }

        let old_path = self.path_for(old_name);
        std::fs::rename(&old_path, self.path_for(new_name)).map_err(|e| {
            Error::io_error("script".to_string(), old_path.display().to_string(), e)
        })
    }
}
