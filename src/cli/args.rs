//! Defines the command-line arguments and subcommands for the dipascii CLI.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "dipascii",
    version,
    about = "Inspect and query DipTrace / ACCEL_ASCII schematic exports."
)]
pub struct DipArgs {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the document as an indented outline.
    Tree {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print every list with the given name.
    Find {
        #[arg(required = true)]
        file: PathBuf,
        /// List name to look for.
        name: String,
        /// Search the whole tree instead of top-level items only.
        #[arg(short, long)]
        descendants: bool,
    },
    /// Walk down through named children, then read a `(name value)` attribute.
    Get {
        #[arg(required = true)]
        file: PathBuf,
        /// Child names to descend through, followed by the attribute name.
        #[arg(required = true, num_args = 1..)]
        path: Vec<String>,
    },
    /// Serialize the parsed tree.
    Dump {
        #[arg(required = true)]
        file: PathBuf,
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
    },
    /// Show the detected format and node counts.
    Info {
        #[arg(required = true)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_splits_path_and_attribute() {
        let args = DipArgs::try_parse_from(["dipascii", "get", "doc.sch", "library", "textStyleDef", "font"]).unwrap();
        match args.command {
            Command::Get { path, .. } => assert_eq!(path, ["library", "textStyleDef", "font"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_counts() {
        let args = DipArgs::try_parse_from(["dipascii", "-vv", "info", "doc.sch"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn dump_defaults_to_json() {
        let args = DipArgs::try_parse_from(["dipascii", "dump", "doc.sch"]).unwrap();
        assert!(matches!(args.command, Command::Dump { format: DumpFormat::Json, .. }));
    }
}
