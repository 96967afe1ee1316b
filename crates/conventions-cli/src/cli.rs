//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Java conventions - resolve and materialize shared build conventions
#[derive(Parser, Debug)]
#[command(name = "conventions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory to operate on
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = ".",
        env = "CONVENTIONS_PROJECT_DIR"
    )]
    pub project_dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve every convention setting for the project
    ///
    /// Examples:
    ///   conventions resolve
    ///   conventions resolve -P conventions.coverage.minimum=0.9
    ///   conventions resolve --jdk-version 21 --json
    Resolve {
        #[command(flatten)]
        inputs: ResolveArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the declared settings with their aliases and defaults
    Settings {
        /// Defaults file to read instead of the user defaults
        #[arg(long, env = "CONVENTIONS_DEFAULTS")]
        defaults: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Install the pre-commit hook into the repository's hooks directory
    InstallHooks,

    /// Write the Checkstyle configuration under build/generated/checkstyle
    WriteCheckstyle {
        /// Root project holding config/checkstyle/suppressions.xml
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Validate conventions, write Checkstyle config and install hooks
    Setup {
        #[command(flatten)]
        inputs: ResolveArgs,
    },
}

/// Inputs shared by commands that resolve conventions.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveArgs {
    /// Project property, repeatable
    #[arg(
        short = 'P',
        long = "property",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value
    )]
    pub properties: Vec<(String, String)>,

    /// Override a setting by name, repeatable
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    /// Align compiler, bytecode and runtime JDK versions
    #[arg(long, value_name = "VERSION")]
    pub jdk_version: Option<i64>,

    /// Align compiler and runtime JDK vendors
    #[arg(long, value_name = "VENDOR")]
    pub jdk_vendor: Option<String>,

    /// Defaults file to read instead of the user defaults
    #[arg(long, env = "CONVENTIONS_DEFAULTS")]
    pub defaults: Option<PathBuf>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
