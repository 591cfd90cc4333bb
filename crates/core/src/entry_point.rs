//! The entry-point contract of a script source.
//!
//! A runnable script declares its arguments with header annotation lines
//!
//! ```sh
//! # @arg name string Who to greet
//! ```
//!
//! and must define a shell function named `run`. The annotations form an
//! ordered argument list that is read at run time and never persisted.
//! The declared type tag is informational: collected values are always
//! passed through as strings.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// Name of the function every runnable script must define
pub const ENTRY_FUNCTION: &str = "run";

const ARG_ANNOTATION: &str = "# @arg";

/// Type tag declared for an argument. Unrecognized tags fall back to
/// [`ArgKind::String`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgKind {
    #[default]
    String,
    Int,
    Float,
    Bool,
}

impl ArgKind {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "int" | "integer" => Self::Int,
            "float" | "number" => Self::Float,
            "bool" | "boolean" => Self::Bool,
            _ => Self::String,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

impl Display for ArgKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.tag())
    }
}

/// One declared argument: name, type tag and description, in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: String,
    pub kind: ArgKind,
    pub description: String,
}

impl Display for ArgumentSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)?;

        if !self.description.is_empty() {
            write!(formatter, " ({})", self.description)?;
        }

        Ok(())
    }
}

/// The parsed contract of one script source.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    pub args: Vec<ArgumentSpec>,
}

/// Parses the entry-point contract out of a script source.
///
/// Collects `# @arg` annotations in declared order and verifies that the
/// source defines a `run` function.
///
/// # Errors
///
/// Fails with [`Error::Load`] if an annotation is malformed or the source
/// has no `run` function.
pub fn parse_entry_point(name: &str, source: &str) -> Result<EntryPoint> {
    let mut args = Vec::new();
    let mut has_entry_function = false;

    for line in source.lines() {
        let trimmed = line.trim_start();

        if let Some(annotation) = trimmed.strip_prefix(ARG_ANNOTATION) {
            if annotation.is_empty() {
                return Err(Error::load(
                    name,
                    "malformed `# @arg` annotation: missing argument name",
                ));
            }

            // A different marker such as `# @argument` is not an annotation
            if !annotation.starts_with(char::is_whitespace) {
                continue;
            }

            args.push(parse_argument_spec(name, annotation)?);
        } else if is_entry_function(trimmed) {
            has_entry_function = true;
        }
    }

    if !has_entry_function {
        return Err(Error::load(
            name,
            format!("no `{ENTRY_FUNCTION}` function found"),
        ));
    }

    Ok(EntryPoint { args })
}

fn parse_argument_spec(script_name: &str, annotation: &str) -> Result<ArgumentSpec> {
    let mut parts = annotation.split_whitespace();

    let Some(arg_name) = parts.next() else {
        return Err(Error::load(
            script_name,
            "malformed `# @arg` annotation: missing argument name",
        ));
    };

    let kind = parts.next().map(ArgKind::from_tag).unwrap_or_default();
    let description = parts.collect::<Vec<_>>().join(" ");

    Ok(ArgumentSpec {
        name: arg_name.to_string(),
        kind,
        description,
    })
}

fn is_entry_function(line: &str) -> bool {
    line.starts_with(&format!("{ENTRY_FUNCTION}()"))
        || line.starts_with(&format!("{ENTRY_FUNCTION} ()"))
        || line.starts_with(&format!("function {ENTRY_FUNCTION}"))
}
