//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `qds`
//! binary using the `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the qds CLI tool.
#[derive(Parser, Debug)]
#[command(name = "qds", about = "Manage and run your personal qds scripts")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Base directory for qds scripts and the registry.
    ///
    /// If not provided, defaults to `~/.qds`.
    #[arg(long, global = true)]
    pub qds_dir: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Add a new qds script
    ///
    /// Will be saved to `~/.qds/<name>.sh`. Prompts for any value not
    /// provided on the command line.
    Add {
        /// The name of the qds script
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// The description of the qds script
        #[arg(long, short = 'd')]
        desc: Option<String>,
    },

    /// List all qds scripts
    List,

    /// View a qds script's source
    View {
        /// The name of the qds script (a picker is shown if unspecified)
        #[arg(long, short = 'n')]
        name: Option<String>,
    },

    /// Delete a qds script
    Delete {
        /// The name of the qds script (a picker is shown if unspecified)
        #[arg(long, short = 'n')]
        name: Option<String>,
    },

    /// Rename a qds script
    Rename {
        /// The current name of the qds script (a picker is shown if unspecified)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// The new name of the qds script (prompted if unspecified)
        #[arg(long = "new-name", short = 'N')]
        new_name: Option<String>,
    },

    /// Update the description of a qds script
    Update {
        /// The name of the qds script (a picker is shown if unspecified)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// The new description (prompted if unspecified)
        #[arg(long, short = 'd')]
        desc: Option<String>,
    },

    /// Run a qds script, prompting for its declared arguments
    Run {
        /// The name of the qds script (a picker is shown if unspecified)
        #[arg(long, short = 'n')]
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_list() {
        let args = Args::parse_from(["qds", "list"]);
        assert!(args.qds_dir.is_none());
        assert!(matches!(args.command, CliCommand::List));
    }

    #[test]
    fn test_args_add_short_flags() {
        let args = Args::parse_from(["qds", "add", "-n", "greet", "-d", "Say hello"]);
        match args.command {
            CliCommand::Add { name, desc } => {
                assert_eq!(name, Some("greet".to_string()));
                assert_eq!(desc, Some("Say hello".to_string()));
            }
            _ => panic!("Expected the add command"),
        }
    }

    #[test]
    fn test_args_add_long_flags() {
        let args = Args::parse_from(["qds", "add", "--name", "greet", "--desc", "Say hello"]);
        match args.command {
            CliCommand::Add { name, desc } => {
                assert_eq!(name, Some("greet".to_string()));
                assert_eq!(desc, Some("Say hello".to_string()));
            }
            _ => panic!("Expected the add command"),
        }
    }

    #[test]
    fn test_args_add_without_flags() {
        let args = Args::parse_from(["qds", "add"]);
        match args.command {
            CliCommand::Add { name, desc } => {
                assert!(name.is_none());
                assert!(desc.is_none());
            }
            _ => panic!("Expected the add command"),
        }
    }

    #[test]
    fn test_args_rename_new_name() {
        let args = Args::parse_from(["qds", "rename", "-n", "old", "-N", "new"]);
        match args.command {
            CliCommand::Rename { name, new_name } => {
                assert_eq!(name, Some("old".to_string()));
                assert_eq!(new_name, Some("new".to_string()));
            }
            _ => panic!("Expected the rename command"),
        }
    }

    #[test]
    fn test_args_update() {
        let args = Args::parse_from(["qds", "update", "--name", "greet", "--desc", "Newer"]);
        match args.command {
            CliCommand::Update { name, desc } => {
                assert_eq!(name, Some("greet".to_string()));
                assert_eq!(desc, Some("Newer".to_string()));
            }
            _ => panic!("Expected the update command"),
        }
    }

    #[test]
    fn test_args_run() {
        let args = Args::parse_from(["qds", "run", "--name", "greet"]);
        match args.command {
            CliCommand::Run { name } => assert_eq!(name, Some("greet".to_string())),
            _ => panic!("Expected the run command"),
        }
    }

    #[test]
    fn test_args_global_qds_dir_after_subcommand() {
        let args = Args::parse_from(["qds", "list", "--qds-dir", "/tmp/qds"]);
        assert_eq!(args.qds_dir, Some("/tmp/qds".to_string()));
    }

    #[test]
    fn test_args_global_qds_dir_before_subcommand() {
        let args = Args::parse_from(["qds", "--qds-dir", "/tmp/qds", "view", "-n", "greet"]);
        assert_eq!(args.qds_dir, Some("/tmp/qds".to_string()));
        match args.command {
            CliCommand::View { name } => assert_eq!(name, Some("greet".to_string())),
            _ => panic!("Expected the view command"),
        }
    }
}
