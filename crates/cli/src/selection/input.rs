//! Blocking line prompts.

use std::io::{stdin, stdout, Write};

use qds_core::error::Result;

use crate::report::CHEVRON;

/// Prompts for a single line of text, re-prompting until the input is
/// non-empty.
///
/// # Errors
///
/// Returns an error if stdin/stdout cannot be used.
pub fn prompt_line(prompt: &str) -> Result<String> {
    loop {
        print!("{prompt} ");
        stdout().flush()?;

        let mut input = String::new();
        stdin().read_line(&mut input)?;
        let read_value = input.trim().to_string();

        if !read_value.is_empty() {
            return Ok(read_value);
        }
    }
}

/// Prompts for one argument value. An empty line is a valid value: the
/// collected text is passed through to the script as-is.
///
/// # Errors
///
/// Returns an error if stdin/stdout cannot be used.
pub fn prompt_argument_value() -> Result<String> {
    print!("    {CHEVRON} ");
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
