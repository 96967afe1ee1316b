//! Java conventions CLI
//!
//! Stand-in host for the convention engine: captures a project from disk,
//! prints its resolved conventions and materializes the bundled resources.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(&cli.project_dir, cmd),
        None => {
            println!("{} Java conventions CLI", "conventions".green().bold());
            println!();
            println!("Run {} for available commands.", "conventions --help".cyan());
            Ok(())
        }
    }
}

/// `-v` forces DEBUG; otherwise `RUST_LOG` decides, and nothing is logged
/// when it is unset.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    tracing::debug!("Verbose mode enabled");
}

/// Canonicalize a directory argument, rejecting paths that are not directories.
fn existing_dir(path: &Path, what: &str) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "{what} directory '{}' does not exist",
            path.display()
        )));
    }
    Ok(conventions_fs::io::canonical_dir(path)?)
}

fn execute_command(project_dir: &Path, cmd: Commands) -> Result<()> {
    let project_dir = existing_dir(project_dir, "Project")?;
    match cmd {
        Commands::Resolve { inputs, json } => commands::run_resolve(&project_dir, &inputs, json),
        Commands::Settings { defaults, json } => {
            commands::run_settings(defaults.as_deref(), json)
        }
        Commands::InstallHooks => commands::run_install_hooks(&project_dir),
        Commands::WriteCheckstyle { root } => {
            let root = match root {
                Some(root) => existing_dir(&root, "Root project")?,
                None => project_dir.clone(),
            };
            commands::run_write_checkstyle(&project_dir, &root)
        }
        Commands::Setup { inputs } => commands::run_setup(&project_dir, &inputs),
    }
}
