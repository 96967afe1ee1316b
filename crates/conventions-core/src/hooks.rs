//! Git hook installation
//!
//! Installs a `pre-commit` hook into the directory git runs hooks from. A
//! project that commits its own `scripts/git-hooks/pre-commit` gets exactly
//! that file; otherwise the bundled hook is staged under
//! `build/generated/git-hooks/` and installed from there.

use std::fmt;
use std::path::{Path, PathBuf};

use conventions_fs::{ProjectPath, io};

use crate::Result;
use crate::resources::{BundledResources, PRE_COMMIT_HOOK};

const PRE_COMMIT: &str = "pre-commit";

/// Where the installed hook came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookSource {
    /// The project's own `scripts/git-hooks/pre-commit`
    Project(PathBuf),
    /// The bundled hook, staged at the given path
    Bundled(PathBuf),
}

impl fmt::Display for HookSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project(path) => write!(f, "project hook {}", path.display()),
            Self::Bundled(path) => write!(f, "bundled hook (staged at {})", path.display()),
        }
    }
}

/// Outcome of [`install_git_hooks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookInstall {
    Installed { source: HookSource, target: PathBuf },
    /// The project is not a git checkout
    Skipped,
}

/// Install the pre-commit hook for the root project at `root_dir`.
pub fn install_git_hooks(root_dir: &Path, resources: &BundledResources) -> Result<HookInstall> {
    let Some(hooks_dir) = conventions_git::hooks_dir(root_dir)? else {
        tracing::info!(dir = %root_dir.display(), "No .git found, skipping hook installation");
        return Ok(HookInstall::Skipped);
    };

    let project_hook = ProjectPath::ProjectPreCommitHook.under(root_dir);
    let (content, source) = if project_hook.is_file() {
        (io::read_bytes(&project_hook)?, HookSource::Project(project_hook))
    } else {
        let staged = ProjectPath::GeneratedPreCommitHook.under(root_dir);
        let bundled = resources.get(PRE_COMMIT_HOOK)?;
        io::write_atomic(&staged, bundled)?;
        (bundled.to_vec(), HookSource::Bundled(staged))
    };

    let target = hooks_dir.join(PRE_COMMIT);
    io::write_executable(&target, &content)?;
    tracing::info!(target = %target.display(), %source, "Installed pre-commit hook");

    Ok(HookInstall::Installed { source, target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use conventions_test_utils::git::fake_git_dir;
    use conventions_test_utils::project::TestProject;
    use pretty_assertions::assert_eq;

    #[test]
    fn skipped_without_git() {
        let project = TestProject::new("demo");

        let outcome = install_git_hooks(project.root(), &BundledResources::builtin()).unwrap();

        assert_eq!(outcome, HookInstall::Skipped);
        project.assert_file_not_exists("build/generated/git-hooks/pre-commit");
    }

    #[test]
    fn project_hook_is_installed_verbatim() {
        let project = TestProject::new("demo");
        fake_git_dir(project.root());
        project.write("scripts/git-hooks/pre-commit", "custom-hook");

        let outcome = install_git_hooks(project.root(), &BundledResources::builtin()).unwrap();

        assert!(matches!(
            outcome,
            HookInstall::Installed { source: HookSource::Project(_), .. }
        ));
        assert_eq!(project.read(".git/hooks/pre-commit"), b"custom-hook");
        project.assert_file_not_exists("build/generated/git-hooks/pre-commit");
    }

    #[test]
    fn bundled_hook_is_staged_and_installed() {
        let project = TestProject::new("demo");
        fake_git_dir(project.root());
        let resources = BundledResources::builtin();

        install_git_hooks(project.root(), &resources).unwrap();

        let bundled = resources.get(PRE_COMMIT_HOOK).unwrap();
        assert_eq!(project.read(".git/hooks/pre-commit"), bundled);
        assert_eq!(project.read("build/generated/git-hooks/pre-commit"), bundled);
    }

    #[test]
    fn missing_bundled_hook_is_fatal_when_needed() {
        let project = TestProject::new("demo");
        fake_git_dir(project.root());

        let err = install_git_hooks(project.root(), &BundledResources::from_entries(&[]))
            .unwrap_err();

        assert!(matches!(err, crate::Error::MissingBundledResource { .. }));
    }
}
