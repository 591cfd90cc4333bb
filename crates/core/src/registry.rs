//! The script registry: an ordered name-to-metadata mapping backed by one
//! structured document file.
//!
//! Every mutating call loads the whole document, applies the change and
//! rewrites the file in full. There is no locking; the last writer wins.

use std::fs::File;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The full registry document, in file order.
pub type RegistryDocument = IndexMap<String, ScriptEntry>;

/// Metadata kept for one registered script.
///
/// The script name is the registry key (and the source file stem), not a
/// field of the entry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub desc: String,
    pub created_at: String,
}

/// Partial update of a [`ScriptEntry`]; only present fields are applied.
#[derive(Debug, Default, Clone)]
pub struct ScriptUpdate {
    pub desc: Option<String>,
    pub created_at: Option<String>,
}

/// Handle to the registry file.
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    /// Loads the registry document.
    ///
    /// A nonexistent or empty file loads as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does not
    /// parse as a name-keyed mapping of entries.
    pub fn load(&self) -> Result<RegistryDocument> {
        if !self.path.exists() {
            return Ok(RegistryDocument::new());
        }

        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::io_error("registry".to_string(), self.path_string(), e))?;

        if raw.trim().is_empty() {
            return Ok(RegistryDocument::new());
        }

        serde_yaml::from_str(&raw).map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "registry".to_string(),
                self.path_string(),
                e,
            )
        })
    }

    /// Rewrites the registry file with the given document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialization fails.
    pub fn save(&self, document: &RegistryDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io_error(
                    "qds directory".to_string(),
                    parent.display().to_string(),
                    e,
                )
            })?;
        }

        let file = File::create(&self.path)
            .map_err(|e| Error::io_error("registry".to_string(), self.path_string(), e))?;

        serde_yaml::to_writer(file, document).map_err(|e| {
            Error::yaml_error(
                "writing".to_string(),
                "registry".to_string(),
                self.path_string(),
                e,
            )
        })
    }

    /// Registers a new script.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::AlreadyExists`] if an entry with the same name is
    /// already registered.
    pub fn add(&self, name: &str, entry: ScriptEntry) -> Result<()> {
        let mut document = self.load()?;

        if document.contains_key(name) {
            return Err(Error::AlreadyExists(name.to_string()));
        }

        document.insert(name.to_string(), entry);
        self.save(&document)
    }

    /// Returns the entry registered under `name`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EntryNotFound`] if no such entry exists.
    pub fn get(&self, name: &str) -> Result<ScriptEntry> {
        let document = self.load()?;

        document
            .get(name)
            .cloned()
            .ok_or_else(|| Error::EntryNotFound(name.to_string()))
    }

    /// Applies a partial update to the named entry. Fields absent from the
    /// update are left untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EntryNotFound`] if no such entry exists.
    pub fn update(&self, name: &str, update: ScriptUpdate) -> Result<()> {
        let mut document = self.load()?;

        let Some(entry) = document.get_mut(name) else {
            return Err(Error::EntryNotFound(name.to_string()));
        };

        if let Some(desc) = update.desc {
            entry.desc = desc;
        }
        if let Some(created_at) = update.created_at {
            entry.created_at = created_at;
        }

        self.save(&document)
    }

    /// Moves the entry registered under `old_name` to `new_name`, keeping
    /// its metadata. The renamed entry is re-appended; the order of the
    /// remaining entries is preserved.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Validation`] if the names are equal or `new_name`
    /// is already taken, and with [`Error::EntryNotFound`] if `old_name` is
    /// not registered.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<()> {
        if old_name == new_name {
            return Err(Error::Validation(
                "Both the old name and new name are the same".to_string(),
            ));
        }

        let mut document = self.load()?;

        if document.contains_key(new_name) {
            return Err(Error::Validation(format!(
                "There already exists a script named '{new_name}'. Please choose another one"
            )));
        }

        let Some(entry) = document.shift_remove(old_name) else {
            return Err(Error::EntryNotFound(old_name.to_string()));
        };

        document.insert(new_name.to_string(), entry);
        self.save(&document)
    }

    /// Removes the named entry.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EntryNotFound`] if no such entry exists.
    pub fn delete(&self, name: &str) -> Result<()> {
        let mut document = self.load()?;

        if document.shift_remove(name).is_none() {
            return Err(Error::EntryNotFound(name.to_string()));
        }

        self.save(&document)
    }

    /// All registered script names, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be loaded.
    pub fn script_names(&self) -> Result<Vec<String>> {
        Ok(self.load()?.keys().cloned().collect())
    }
}
