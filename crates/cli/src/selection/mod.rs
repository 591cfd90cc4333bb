//! Interactive script selection and user input.
//!
//! This module provides the terminal-based picker used when a command needs
//! a script name and none was given, plus the blocking line prompts used
//! for free-text input and argument collection.
//!
//! # User Interface
//!
//! The picker supports:
//! - Arrow-key navigation with wrap-around
//! - Enter to select a script
//! - `/` to filter (fuzzy search), Escape to stop filtering
//! - `q` or Escape to quit without selecting

pub mod input;
pub mod types;
pub mod ui;

pub use input::{prompt_argument_value, prompt_line};
pub use types::{PickChoice, ScriptListing};
pub use ui::pick_script;
