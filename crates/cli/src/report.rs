//! Human-oriented terminal output.
//!
//! All user-facing reporting goes through a [`Reporter`]: `[qds-info]` and
//! `[qds-error]` prefixed status lines, numbered script listings, the boxed
//! run header and the bar-prefixed rendering of script output. Diagnostic
//! logging stays on the `log` crate and is not handled here.

use std::path::Path;

use chrono::DateTime;
use crossterm::style::Stylize;
use qds_core::entry_point::ArgumentSpec;
use qds_core::registry::ScriptEntry;

pub const DOT: char = '·';
pub const CHEVRON: char = '❯';
pub const BAR: char = '│';

const INDENT: &str = "    ";

const NO_OUTPUT_PLACEHOLDER: &str =
    "This script returned no output. Please ensure that the `run` function prints a string";

pub struct Reporter;

impl Reporter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn info(&self, message: &str) {
        println!("[qds-info] {}", message.green());
    }

    pub fn error(&self, message: &str) {
        eprintln!("[qds-error] {}", message.red());
    }

    /// Header line for `list`.
    pub fn found_count(&self, count: usize) {
        println!("{}\n", format!("{count} qds scripts found").green());
    }

    /// One numbered block per script for `list`.
    pub fn listing(&self, position: usize, name: &str, entry: &ScriptEntry) {
        println!("{position}. {}", name.cyan());
        println!(
            "{} {}",
            "created at ".dim(),
            humanize_rfc3339(&entry.created_at).yellow()
        );
        println!("{} {}", "description".dim(), entry.desc);
        println!();
    }

    /// Numbered source listing for `view`.
    pub fn source_listing(&self, path: &Path, contents: &str) {
        println!("File {}\n", path.display());

        let number_width = contents.lines().count().to_string().len().max(1);
        for (index, line) in contents.lines().enumerate() {
            let gutter = format!("{:>number_width$} {BAR}", index + 1);
            println!("{} {line}", gutter.dim());
        }
    }

    /// Boxed header shown before running a script: the name on the border,
    /// the description inside.
    pub fn boxed_header(&self, title: &str, body: &str) {
        let body_width = body.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        // Inner width: body plus two spaces of padding per side, wide enough
        // for the title on the top border
        let inner_width = (body_width + 4).max(title.chars().count() + 4);

        let top_fill = "─".repeat(inner_width.saturating_sub(title.chars().count() + 3));
        let blank = " ".repeat(inner_width);

        println!();
        println!("{}", format!("┌─ {title} {top_fill}┐").cyan());
        println!("{}{}{}", "│".cyan(), blank, "│".cyan());
        for line in body.lines() {
            let padding = " ".repeat(inner_width - line.chars().count() - 4);
            println!("{}  {line}{padding}  {}", "│".cyan(), "│".cyan());
        }
        if body.is_empty() {
            println!("{}{}{}", "│".cyan(), blank, "│".cyan());
        }
        println!("{}{}{}", "│".cyan(), blank, "│".cyan());
        println!("{}", format!("└{}┘", "─".repeat(inner_width)).cyan());
        println!();
    }

    /// Label printed above the prompt for one declared argument.
    pub fn argument_label(&self, spec: &ArgumentSpec) {
        println!(
            "{INDENT}{}{}",
            spec.name.as_str().yellow(),
            format!(" {DOT} {}", spec.description).dim()
        );
    }

    pub fn output_header(&self) {
        println!("{INDENT}{}\n", "Output".cyan());
    }

    /// Renders script output line by line behind a decorative bar.
    pub fn script_output(&self, text: &str) {
        for line in text.lines() {
            println!("{INDENT}{} {line}", BAR.to_string().dark_green().dim());
        }
    }

    /// Fixed message shown when a script produced no output.
    pub fn no_output_placeholder(&self) {
        println!(
            "{INDENT}{} {}",
            BAR.to_string().dark_green().dim(),
            NO_OUTPUT_PLACEHOLDER.italic().dim()
        );
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an RFC3339 timestamp for display, falling back to a fixed
/// marker when it does not parse.
#[must_use]
pub fn humanize_rfc3339(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        Err(_) => "wrong RFC3339 format".to_string(),
    }
}
