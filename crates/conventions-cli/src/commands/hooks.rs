//! Hook installation command

use std::path::Path;

use colored::Colorize;
use conventions_core::{BundledResources, HookInstall, install_git_hooks};

use crate::error::Result;

/// Install the pre-commit hook for the repository rooted at `root_dir`.
pub fn run_install_hooks(root_dir: &Path) -> Result<()> {
    match install_git_hooks(root_dir, &BundledResources::builtin())? {
        HookInstall::Installed { source, target } => {
            println!(
                "{} Installed pre-commit hook: {}",
                "\u{2713}".green().bold(),
                target.display().to_string().cyan()
            );
            println!("  from {}", source.to_string().dimmed());
        }
        HookInstall::Skipped => {
            println!(
                "{} No .git found in {}, skipping hook installation.",
                "note:".yellow().bold(),
                root_dir.display()
            );
        }
    }
    Ok(())
}
