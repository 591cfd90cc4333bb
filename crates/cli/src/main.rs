use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use qds_cli::cli_args::{Args, CliCommand};
use qds_cli::commands::{self, CommandContext};
use qds_cli::report::Reporter;
use qds_core::config::{self, DEFAULT_SHELL};
use qds_core::error::Result;
use qds_core::registry::Registry;
use qds_core::script_files::ScriptStore;

fn execute(reporter: &Reporter) -> Result<()> {
    let args = Args::parse();

    let qds_dir = config::get_qds_dir(&args.qds_dir);
    debug!("qds directory: `{qds_dir}`");
    config::ensure_qds_dir(&qds_dir)?;

    let registry = Registry::new(config::registry_path(&qds_dir));
    let scripts = ScriptStore::new(&qds_dir);
    let shell = env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string());

    let context = CommandContext {
        registry: &registry,
        scripts: &scripts,
        reporter,
        shell,
    };

    match args.command {
        CliCommand::Add { name, desc } => commands::add(&context, name, desc),
        CliCommand::List => commands::list(&context),
        CliCommand::View { name } => commands::view(&context, name),
        CliCommand::Delete { name } => commands::delete(&context, name),
        CliCommand::Rename { name, new_name } => commands::rename(&context, name, new_name),
        CliCommand::Update { name, desc } => commands::update(&context, name, desc),
        CliCommand::Run { name } => commands::run(&context, name),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let reporter = Reporter::new();
    match execute(&reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
