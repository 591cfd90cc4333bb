//! Integration tests for the command surface.
//!
//! Every handler is driven through its non-interactive path (all values
//! provided as flags would supply them), against a scratch qds directory.

use qds_cli::commands::{self, CommandContext};
use qds_cli::report::Reporter;
use qds_core::config::{registry_path, DEFAULT_SHELL};
use qds_core::error::Error;
use qds_core::registry::Registry;
use qds_core::script_files::ScriptStore;

struct Fixture {
    _temp_dir: tempfile::TempDir,
    registry: Registry,
    scripts: ScriptStore,
    reporter: Reporter,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().to_str().unwrap().to_string();
        Self {
            registry: Registry::new(registry_path(&base)),
            scripts: ScriptStore::new(temp_dir.path()),
            reporter: Reporter::new(),
            _temp_dir: temp_dir,
        }
    }

    fn context(&self) -> CommandContext<'_> {
        CommandContext {
            registry: &self.registry,
            scripts: &self.scripts,
            reporter: &self.reporter,
            shell: DEFAULT_SHELL.to_string(),
        }
    }

    fn add(&self, name: &str, desc: &str) {
        commands::add(
            &self.context(),
            Some(name.to_string()),
            Some(desc.to_string()),
        )
        .unwrap();
    }
}

#[test]
fn test_add_creates_file_and_entry() {
    let fixture = Fixture::new();
    fixture.add("greet", "Say hello");

    assert!(fixture.scripts.exists("greet"));
    assert_eq!(fixture.registry.script_names().unwrap(), vec!["greet"]);

    let entry = fixture.registry.get("greet").unwrap();
    assert_eq!(entry.desc, "Say hello");
    // The stamp is RFC3339
    assert!(chrono::DateTime::parse_from_rfc3339(&entry.created_at).is_ok());
}

#[test]
fn test_add_conflict() {
    let fixture = Fixture::new();
    fixture.add("greet", "first");

    let result = commands::add(
        &fixture.context(),
        Some("greet".to_string()),
        Some("second".to_string()),
    );
    assert!(matches!(result, Err(Error::AlreadyExists(_))));
}

#[test]
fn test_list_empty_registry_fails() {
    let fixture = Fixture::new();
    let result = commands::list(&fixture.context());
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_list_after_add() {
    let fixture = Fixture::new();
    fixture.add("greet", "Say hello");
    fixture.add("deploy", "Ship it");

    assert!(commands::list(&fixture.context()).is_ok());
}

#[test]
fn test_view_unknown_name() {
    let fixture = Fixture::new();
    fixture.add("greet", "Say hello");

    let result = commands::view(&fixture.context(), Some("ghost".to_string()));
    assert!(matches!(result, Err(Error::EntryNotFound(_))));
}

#[test]
fn test_view_known_name() {
    let fixture = Fixture::new();
    fixture.add("greet", "Say hello");

    assert!(commands::view(&fixture.context(), Some("greet".to_string())).is_ok());
}

#[test]
fn test_delete_removes_file_and_entry() {
    let fixture = Fixture::new();
    fixture.add("greet", "Say hello");

    commands::delete(&fixture.context(), Some("greet".to_string())).unwrap();

    assert!(!fixture.scripts.exists("greet"));
    assert!(fixture.registry.script_names().unwrap().is_empty());
}

#[test]
fn test_delete_on_empty_registry() {
    let fixture = Fixture::new();
    let result = commands::delete(&fixture.context(), Some("greet".to_string()));
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_rename_moves_both_stores() {
    let fixture = Fixture::new();
    fixture.add("old", "kept");

    commands::rename(
        &fixture.context(),
        Some("old".to_string()),
        Some("new".to_string()),
    )
    .unwrap();

    assert!(!fixture.scripts.exists("old"));
    assert!(fixture.scripts.exists("new"));
    assert_eq!(fixture.registry.get("new").unwrap().desc, "kept");
}

#[test]
fn test_rename_same_name_rejected() {
    let fixture = Fixture::new();
    fixture.add("greet", "d");

    let result = commands::rename(
        &fixture.context(),
        Some("greet".to_string()),
        Some("greet".to_string()),
    );
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_rename_taken_name_rejected() {
    let fixture = Fixture::new();
    fixture.add("one", "d");
    fixture.add("two", "d");

    let result = commands::rename(
        &fixture.context(),
        Some("one".to_string()),
        Some("two".to_string()),
    );
    assert!(matches!(result, Err(Error::Validation(_))));
    // Nothing moved
    assert!(fixture.scripts.exists("one"));
    assert!(fixture.scripts.exists("two"));
}

#[test]
fn test_update_changes_desc_only() {
    let fixture = Fixture::new();
    fixture.add("greet", "old desc");
    let created_at = fixture.registry.get("greet").unwrap().created_at;

    commands::update(
        &fixture.context(),
        Some("greet".to_string()),
        Some("new desc".to_string()),
    )
    .unwrap();

    let entry = fixture.registry.get("greet").unwrap();
    assert_eq!(entry.desc, "new desc");
    assert_eq!(entry.created_at, created_at);
}

#[test]
fn test_run_zero_argument_script() {
    let fixture = Fixture::new();
    fixture.add("plain", "No arguments");

    // Replace the starter template with a zero-argument script so the run
    // needs no prompting at all
    fixture.scripts.delete("plain").unwrap();
    fixture
        .scripts
        .create("plain", "run() {\n    echo plain output\n}\n")
        .unwrap();

    assert!(commands::run(&fixture.context(), Some("plain".to_string())).is_ok());
}

#[test]
fn test_run_script_without_entry_function() {
    let fixture = Fixture::new();
    fixture.add("broken", "No run function");

    fixture.scripts.delete("broken").unwrap();
    fixture.scripts.create("broken", "echo hi\n").unwrap();

    let result = commands::run(&fixture.context(), Some("broken".to_string()));
    assert!(matches!(result, Err(Error::Load { .. })));
}

#[test]
fn test_run_failing_script() {
    let fixture = Fixture::new();
    fixture.add("boom", "Always fails");

    fixture.scripts.delete("boom").unwrap();
    fixture
        .scripts
        .create("boom", "run() {\n    echo broken >&2\n    return 1\n}\n")
        .unwrap();

    let result = commands::run(&fixture.context(), Some("boom".to_string()));
    assert!(matches!(result, Err(Error::Invocation { .. })));
}

#[test]
fn test_run_unknown_name() {
    let fixture = Fixture::new();
    fixture.add("greet", "d");

    let result = commands::run(&fixture.context(), Some("ghost".to_string()));
    assert!(matches!(result, Err(Error::EntryNotFound(_))));
}
