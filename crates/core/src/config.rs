//! Configuration path utilities for qds.
//!
//! This module provides functions for resolving the qds base directory and
//! the paths inside it, expanding shell variables like `~` in paths.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default base directory holding scripts and the registry
const DEFAULT_QDS_DIR: &str = "~/.qds";

/// File name of the script registry inside the base directory
pub const REGISTRY_FILE_NAME: &str = "scripts.yml";

/// Extension given to every script source file
pub const SCRIPT_EXTENSION: &str = "sh";

/// Default shell used to invoke script entry functions
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Starter contents written for a newly added script.
///
/// The sample `# @arg` annotation and the empty `run` function show the
/// entry-point contract a script must follow.
pub const NEW_SCRIPT_TEMPLATE: &str = "#!/bin/sh
# @arg text string Sample text to be provided

run() {
    :
}
";

/// Resolves the qds base directory.
///
/// If a custom directory is provided, uses that directory. Otherwise, uses
/// `~/.qds`. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use qds_core::config::get_qds_dir;
///
/// // Use default directory
/// let default_dir = get_qds_dir(&None);
/// assert!(!default_dir.starts_with('~'));
///
/// // Use custom directory
/// let custom_dir = get_qds_dir(&Some("/tmp/qds".to_string()));
/// assert_eq!(custom_dir, "/tmp/qds");
/// ```
pub fn get_qds_dir(qds_dir_arg: &Option<String>) -> String {
    let qds_dir = match qds_dir_arg {
        Some(qds_dir) => qds_dir,
        None => DEFAULT_QDS_DIR,
    };

    shellexpand::tilde(qds_dir).to_string()
}

/// Path to the registry file inside the given base directory.
pub fn registry_path(qds_dir: &str) -> PathBuf {
    Path::new(qds_dir).join(REGISTRY_FILE_NAME)
}

/// Path to the source file of the named script inside the given base directory.
pub fn script_path(qds_dir: &str, name: &str) -> PathBuf {
    Path::new(qds_dir).join(format!("{name}.{SCRIPT_EXTENSION}"))
}

/// Creates the base directory (and any missing parents).
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_qds_dir(qds_dir: &str) -> Result<()> {
    std::fs::create_dir_all(qds_dir)
        .map_err(|e| Error::io_error("qds directory".to_string(), qds_dir.to_string(), e))
}
