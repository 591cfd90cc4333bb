//! QDS CLI Library
//!
//! This crate provides the command-line interface for qds, a personal
//! script-management tool. It handles argument parsing, interactive script
//! selection, argument collection and human-oriented reporting.
//!
//! # Key Features
//!
//! - **Command Surface**: add, list, view, delete, rename, update and run
//! - **Interactive Script Selection**: terminal picker when no name is given
//! - **Argument Collection**: prompts for each argument a script declares
//! - **Reporting**: `[qds-info]`/`[qds-error]` prefixed, styled output
//!
//! # Architecture
//!
//! - [`cli_args`]: command-line argument parsing
//! - [`commands`]: one handler per command, all following the same
//!   resolve-validate-perform-report shape
//! - [`selection`]: interactive picker and blocking line prompts
//! - [`report`]: styled terminal output
//!
//! # Examples
//!
//! The `qds` binary:
//!
//! ```bash
//! # Add a script (prompts for whatever is not given)
//! qds add --name greet --desc "Say hello"
//!
//! # List everything
//! qds list
//!
//! # Run interactively - shows the script picker
//! qds run
//!
//! # Run directly by name
//! qds run --name greet
//! ```

pub mod cli_args;
pub mod commands;
pub mod report;
pub mod selection;
