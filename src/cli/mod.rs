//! The dipascii command-line interface.
//!
//! A thin front end over the library: every command loads one document and
//! reads it through the query API.

use crate::ast::List;
use crate::cli::args::{Command, DipArgs, DumpFormat};
use crate::format::Format;
use crate::parse_str;
use clap::Parser;
use miette::{miette, IntoDiagnostic, WrapErr};
use std::io::IsTerminal;
use std::path::Path;
use std::{fs, process};
use termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = DipArgs::parse();
    init_tracing(args.verbose);

    if let Err(report) = dispatch(args.command) {
        eprintln!("{report:?}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(command: Command) -> miette::Result<()> {
    let color = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color);
    match command {
        Command::Tree { file } => {
            let doc = load(&file)?;
            output::write_outline(&mut stdout, &doc).into_diagnostic()
        }
        Command::Find {
            file,
            name,
            descendants,
        } => {
            let doc = load(&file)?;
            let mut found = 0;
            for list in doc.findall(&name, descendants) {
                output::write_outline(&mut stdout, list).into_diagnostic()?;
                found += 1;
            }
            info!(name = %name, found, "find");
            if found == 0 {
                return Err(miette!("no list named '{}' in {}", name, file.display()));
            }
            Ok(())
        }
        Command::Get { file, path } => {
            let doc = load(&file)?;
            let Some((attr, parents)) = path.split_last() else {
                return Err(miette!("an attribute name is required"));
            };
            let mut current = &doc;
            for segment in parents {
                current = current
                    .find(segment, false)
                    .ok_or_else(|| miette!("no child '{}' along path", segment))?;
            }
            let value = current.get(attr)?;
            output::write_node(&mut stdout, value).into_diagnostic()
        }
        Command::Dump { file, format } => {
            let doc = load(&file)?;
            let text = match format {
                DumpFormat::Json => serde_json::to_string_pretty(&doc).into_diagnostic()?,
                DumpFormat::Yaml => serde_yaml::to_string(&doc).into_diagnostic()?,
            };
            println!("{}", text.trim_end());
            Ok(())
        }
        Command::Info { file } => {
            let doc = load(&file)?;
            let summary = output::Summary::of(&doc);
            output::write_info(&mut stdout, Format::detect(&doc), &summary).into_diagnostic()
        }
    }
}

/// Reads and parses `path`, attaching the text to parse errors for rendering.
fn load(path: &Path) -> miette::Result<List> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let doc = match parse_str(&content) {
        Ok(doc) => doc,
        Err(err) => return Err(err.with_source(path.display().to_string(), content).into()),
    };
    info!(path = %path.display(), items = doc.len(), "loaded document");
    Ok(doc)
}
