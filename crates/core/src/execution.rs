//! Invoking a script's entry function.
//!
//! Scripts run out of process: the source file is sourced into the user's
//! shell and its `run` function is called, with the collected argument
//! values exported as environment variables. Stdout is captured for
//! rendering; a non-success exit status is an invocation failure carrying
//! whatever the script wrote to stderr.

use std::path::Path;
use std::process::{Command, Stdio};

use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;

use crate::entry_point::ENTRY_FUNCTION;
use crate::error::{Error, Result};

/// Invokes the named script's entry function and returns its captured
/// stdout.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned, or the entry function
/// exits with a non-success status.
pub fn invoke_entry_point(
    shell: &str,
    name: &str,
    script_path: &Path,
    arguments: &IndexMap<String, String>,
) -> Result<String> {
    let invocation = format!(". '{}' && {ENTRY_FUNCTION}", script_path.display());

    if !arguments.is_empty() {
        debug!(
            "Invoking `{name}` with arguments: {}",
            arguments
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .join(", ")
        );
    }

    let output = Command::new(shell)
        .arg("-c")
        .arg(&invocation)
        .envs(arguments)
        .stdin(Stdio::inherit())
        .output()
        .map_err(Error::SubProcess)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        Err(Error::invocation(name, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SHELL;

    fn write_script(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(format!("{name}.sh"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_invoke_with_argument() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(
            &dir,
            "greet",
            "# @arg text string Sample text\nrun() {\n    echo \"hello $text\"\n}\n",
        );

        let mut arguments = IndexMap::new();
        arguments.insert("text".to_string(), "world".to_string());

        let output = invoke_entry_point(DEFAULT_SHELL, "greet", &path, &arguments).unwrap();
        assert_eq!(output, "hello world\n");
    }

    #[test]
    fn test_invoke_zero_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(&dir, "plain", "run() {\n    echo plain\n}\n");

        let output =
            invoke_entry_point(DEFAULT_SHELL, "plain", &path, &IndexMap::new()).unwrap();
        assert_eq!(output, "plain\n");
    }

    #[test]
    fn test_invoke_silent_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(&dir, "silent", "run() {\n    :\n}\n");

        let output =
            invoke_entry_point(DEFAULT_SHELL, "silent", &path, &IndexMap::new()).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_invoke_failing_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_script(
            &dir,
            "broken",
            "run() {\n    echo boom >&2\n    return 3\n}\n",
        );

        let result = invoke_entry_point(DEFAULT_SHELL, "broken", &path, &IndexMap::new());
        match result {
            Err(Error::Invocation { detail, .. }) => assert!(detail.contains("boom")),
            other => panic!("expected invocation error, got {other:?}"),
        }
    }

    #[test]
    fn test_invoke_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost.sh");

        // The shell fails to source a nonexistent file
        let result = invoke_entry_point(DEFAULT_SHELL, "ghost", &path, &IndexMap::new());
        assert!(result.is_err());
    }
}
