//! Command-line interface implementation for kothi.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for kothi.
#[derive(Parser, Debug)]
#[command(name = "kothi", version, about = "Kothi.js - Restaurant Backend Framework CLI", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new Kothi plugin
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Plugin name (e.g., payment-gateway)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Plugin description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Plugin author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Overwrite an existing plugin directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Root of the Kothi monorepo
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                || e.kind() == ErrorKind::MissingSubcommand
            {
                let printed = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if printed.is_err() {
                    eprintln!("{e}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
