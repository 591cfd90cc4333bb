//! QDS Core Library
//!
//! This crate provides the core functionality for qds, a personal
//! script-management tool that stores short shell scripts in a per-user
//! directory and keeps their metadata in a small registry file.
//!
//! # Key Features
//!
//! - **Registry Store**: Ordered name-to-metadata registry persisted as a
//!   structured document
//! - **Script Files**: One source file per script inside a fixed base directory
//! - **Entry-Point Contract**: Header annotations declaring a script's
//!   arguments, plus the required `run` function
//! - **Invocation**: Running a script's entry function through the user's
//!   shell with collected argument values
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Listing the registered scripts:
//!
//! ```no_run
//! use qds_core::registry::Registry;
//!
//! let registry = Registry::new("/home/user/.qds/scripts.yml");
//! for name in registry.script_names()? {
//!     println!("Script: {name}");
//! }
//! # Ok::<(), qds_core::error::Error>(())
//! ```

pub mod config;
pub mod entry_point;
pub mod error;
pub mod execution;
pub mod registry;
pub mod script_files;
