//! Hooks directory discovery.

use std::path::{Path, PathBuf};

use conventions_fs::ProjectPath;
use git2::Repository;

use crate::Result;

/// Find the directory git executes hooks from for the project at `project_dir`.
///
/// Returns `None` when the project has no `.git` marker. A `.git` directory
/// maps straight to `.git/hooks`. A `.git` file (worktree or submodule) is
/// opened through git2: `core.hooksPath` wins when configured, otherwise the
/// `hooks` directory of the repository's common dir. If the repository cannot
/// be opened the conventional `.git/hooks` path is returned.
pub fn hooks_dir(project_dir: &Path) -> Result<Option<PathBuf>> {
    let marker = ProjectPath::GitMarker.under(project_dir);
    if !marker.exists() {
        return Ok(None);
    }
    if marker.is_dir() {
        return Ok(Some(ProjectPath::GitHooksDir.under(project_dir)));
    }

    let repo = match Repository::open(project_dir) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::warn!(
                dir = %project_dir.display(),
                error = %e,
                "Could not open repository through gitlink, using .git/hooks"
            );
            return Ok(Some(ProjectPath::GitHooksDir.under(project_dir)));
        }
    };

    if let Some(configured) = configured_hooks_path(&repo)? {
        let resolved = if configured.is_absolute() {
            configured
        } else {
            project_dir.join(configured)
        };
        return Ok(Some(resolved));
    }

    Ok(Some(repo.commondir().join("hooks")))
}

fn configured_hooks_path(repo: &Repository) -> Result<Option<PathBuf>> {
    let config = repo.config()?;
    match config.get_path("core.hooksPath") {
        Ok(path) if !path.as_os_str().is_empty() => Ok(Some(path)),
        Ok(_) => Ok(None),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
