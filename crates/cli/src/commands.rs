//! The command surface.
//!
//! Every handler follows the same shape: resolve the target name (flag
//! value, or interactive input when absent), validate, perform the registry
//! and script-file calls, report. Errors propagate to `main`, which reports
//! them and terminates the invocation.

use chrono::Utc;
use indexmap::IndexMap;
use log::debug;

use qds_core::config::NEW_SCRIPT_TEMPLATE;
use qds_core::entry_point::parse_entry_point;
use qds_core::error::{Error, Result};
use qds_core::execution::invoke_entry_point;
use qds_core::registry::{Registry, ScriptEntry, ScriptUpdate};
use qds_core::script_files::ScriptStore;

use crate::report::Reporter;
use crate::selection::{pick_script, prompt_argument_value, prompt_line, PickChoice, ScriptListing};

/// Everything a command handler needs, constructed once in `main` and
/// passed down explicitly.
pub struct CommandContext<'a> {
    pub registry: &'a Registry,
    pub scripts: &'a ScriptStore,
    pub reporter: &'a Reporter,
    pub shell: String,
}

pub fn add(context: &CommandContext, name: Option<String>, desc: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt_line("What do you want to name this qds script?")?,
    };

    if context.scripts.exists(&name) {
        return Err(Error::AlreadyExists(name));
    }

    let desc = match desc {
        Some(desc) => desc,
        None => prompt_line(&format!(
            "Provide a short description for the '{name}' qds script:"
        ))?,
    };

    let path = context.scripts.create(&name, NEW_SCRIPT_TEMPLATE)?;
    context.registry.add(
        &name,
        ScriptEntry {
            desc,
            created_at: Utc::now().to_rfc3339(),
        },
    )?;

    context
        .reporter
        .info(&format!("The qds script '{name}' has been successfully created"));
    context.reporter.info(&format!(
        "Please check out '{}' to edit the script",
        path.display()
    ));
    Ok(())
}

pub fn list(context: &CommandContext) -> Result<()> {
    let document = context.registry.load()?;

    if document.is_empty() {
        return Err(Error::Validation(
            "There are no qds scripts to display".to_string(),
        ));
    }

    context.reporter.found_count(document.len());
    for (position, (name, entry)) in document.iter().enumerate() {
        context.reporter.listing(position + 1, name, entry);
    }

    Ok(())
}

pub fn view(context: &CommandContext, name: Option<String>) -> Result<()> {
    let name = resolve_existing_name(context, name, "view")?;
    let contents = context.scripts.read(&name)?;

    context
        .reporter
        .source_listing(&context.scripts.path_for(&name), &contents);
    Ok(())
}

pub fn delete(context: &CommandContext, name: Option<String>) -> Result<()> {
    let name = resolve_existing_name(context, name, "delete")?;

    context.scripts.delete(&name)?;
    context.registry.delete(&name)?;

    context
        .reporter
        .info(&format!("The qds script '{name}' has been successfully deleted"));
    Ok(())
}

pub fn rename(
    context: &CommandContext,
    name: Option<String>,
    new_name: Option<String>,
) -> Result<()> {
    let name = resolve_existing_name(context, name, "rename")?;

    let new_name = match new_name {
        Some(new_name) => new_name,
        None => prompt_line(&format!(
            "What do you want to rename the script '{name}' to?"
        ))?,
    };

    if name == new_name {
        return Err(Error::Validation(
            "Both the old name and new name are the same".to_string(),
        ));
    }

    if context.registry.load()?.contains_key(&new_name) {
        return Err(Error::Validation(format!(
            "There already exists a script named '{new_name}'. Please choose another one"
        )));
    }

    context.scripts.rename(&name, &new_name)?;
    context.registry.rename(&name, &new_name)?;

    context.reporter.info(&format!(
        "The qds script '{name}' has been successfully renamed to '{new_name}'"
    ));
    Ok(())
}

pub fn update(context: &CommandContext, name: Option<String>, desc: Option<String>) -> Result<()> {
    let name = resolve_existing_name(context, name, "update")?;

    let desc = match desc {
        Some(desc) => desc,
        None => prompt_line(&format!(
            "What do you want to update the description of the script '{name}' to?"
        ))?,
    };

    context.registry.update(
        &name,
        ScriptUpdate {
            desc: Some(desc),
            created_at: None,
        },
    )?;

    context
        .reporter
        .info(&format!("The qds script '{name}' has been successfully updated"));
    Ok(())
}

pub fn run(context: &CommandContext, name: Option<String>) -> Result<()> {
    let name = resolve_existing_name(context, name, "run")?;

    let entry = context.registry.get(&name)?;
    let source = context.scripts.read(&name)?;
    let entry_point = parse_entry_point(&name, &source)?;

    context.reporter.boxed_header(&name, &entry.desc);

    // Collect values for the declared arguments, in declared order. No
    // type coercion: every value travels as a string.
    let mut arguments: IndexMap<String, String> = IndexMap::new();
    for spec in &entry_point.args {
        context.reporter.argument_label(spec);
        let value = prompt_argument_value()?;
        println!();
        arguments.insert(spec.name.clone(), value);
    }

    debug!("Running `{name}` with {} argument(s)", arguments.len());
    let output = invoke_entry_point(
        &context.shell,
        &name,
        &context.scripts.path_for(&name),
        &arguments,
    )?;

    context.reporter.output_header();
    if output.trim().is_empty() {
        context.reporter.no_output_placeholder();
    } else {
        context.reporter.script_output(output.trim_end());
    }

    Ok(())
}

/// Resolves the name of an existing script: the provided value, or an
/// interactive pick over the registry when absent. Rejects unknown names
/// and an empty registry.
fn resolve_existing_name(
    context: &CommandContext,
    provided: Option<String>,
    verb: &str,
) -> Result<String> {
    let document = context.registry.load()?;

    if document.is_empty() {
        return Err(Error::Validation(format!(
            "There are no qds scripts to {verb}"
        )));
    }

    let name = match provided {
        Some(name) => name,
        None => {
            let listings: Vec<ScriptListing> = document
                .iter()
                .map(|(name, entry)| ScriptListing::new(name, &entry.desc))
                .collect();

            match pick_script(
                &format!("Which qds script do you want to {verb}?"),
                &listings,
            )? {
                PickChoice::Index(index) => listings[index].name.clone(),
                PickChoice::Quit => {
                    return Err(Error::Validation(format!(
                        "No script selected to {verb}"
                    )))
                }
            }
        }
    };

    if !document.contains_key(&name) {
        return Err(Error::EntryNotFound(name));
    }

    Ok(name)
}
