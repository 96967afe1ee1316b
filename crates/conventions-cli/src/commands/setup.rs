//! Setup command: resolve, then materialize every bundled resource

use std::path::Path;

use colored::Colorize;

use super::{resolve_project, run_install_hooks, run_write_checkstyle};
use crate::cli::ResolveArgs;
use crate::error::Result;

/// Resolve conventions for `project_dir`, write Checkstyle config and
/// install the pre-commit hook.
///
/// Resolution runs first so a misconfigured project writes nothing.
pub fn run_setup(project_dir: &Path, inputs: &ResolveArgs) -> Result<()> {
    let (context, set) = resolve_project(project_dir, inputs)?;
    println!(
        "{} Resolved conventions for {} (base package {}, JDK {})",
        "=>".blue().bold(),
        context.project().name.cyan(),
        set.base_package().cyan(),
        set.compiler_jdk_version()
    );

    run_write_checkstyle(project_dir, project_dir)?;
    run_install_hooks(project_dir)?;

    println!("\n{}", "Project setup completed!".green().bold());
    Ok(())
}
