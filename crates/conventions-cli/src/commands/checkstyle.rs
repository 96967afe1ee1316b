//! Checkstyle configuration command

use std::path::Path;

use colored::Colorize;
use conventions_core::{BundledResources, SuppressionsSource, write_checkstyle_config};

use crate::error::Result;

/// Write the Checkstyle config for `project_dir`, taking suppressions from `root_dir`.
pub fn run_write_checkstyle(project_dir: &Path, root_dir: &Path) -> Result<()> {
    let files = write_checkstyle_config(project_dir, root_dir, &BundledResources::builtin())?;

    println!(
        "{} Wrote Checkstyle config: {}",
        "\u{2713}".green().bold(),
        files.config.display().to_string().cyan()
    );
    let origin = match &files.suppressions_source {
        SuppressionsSource::Project(path) => path.display().to_string(),
        SuppressionsSource::Bundled => "bundled empty suppressions".to_string(),
    };
    println!(
        "{} Wrote suppressions: {} ({})",
        "\u{2713}".green().bold(),
        files.suppressions.display().to_string().cyan(),
        origin.dimmed()
    );
    Ok(())
}
