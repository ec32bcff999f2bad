//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use bumpcheck::output::OutputMode;

/// bumpcheck - Auto-approval checks for dependency bump pull requests
#[derive(Parser, Debug)]
#[command(
    name = "bumpcheck",
    version,
    about = "Auto-approval checks for dependency bump pull requests",
    long_about = "Decide whether a file changed by a bot pull request is a safe,\n\
                  mechanically verifiable dependency version bump.\n\n\
                  A file passes when its diff bumps exactly one dependency, the\n\
                  new version is a valid upgrade, and the PR title says so."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one changed file of a pull request
    Check {
        /// JSON file describing the changed file (filename, sha, patch)
        #[arg(short, long)]
        file: PathBuf,

        /// Pull request author login
        #[arg(short, long)]
        author: String,

        /// Pull request title
        #[arg(short, long)]
        title: String,

        /// Rule table (TOML); defaults to the built-in Maven rules
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// List the permitted-file rules
    Rules {
        /// Rule table (TOML); defaults to the built-in Maven rules
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Print the table as TOML instead
        #[arg(long)]
        toml: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check {
            file,
            author,
            title,
            rules,
        }) => {
            let approved = commands::check(&file, &author, &title, rules.as_deref(), output_mode)?;
            Ok(if approved { ExitCode::SUCCESS } else { ExitCode::from(1) })
        },
        Some(Command::Rules { rules, toml }) => {
            commands::rules(rules.as_deref(), toml, output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("bumpcheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("bumpcheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'bumpcheck --help' for usage");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
