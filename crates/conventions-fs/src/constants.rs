//! Well-known locations inside a Java project.

use std::path::{Path, PathBuf};

/// Project-relative paths the conventions read from or generate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `.git` marker (directory, or gitlink file for worktrees)
    GitMarker,
    /// Default hooks directory when `.git` is a directory
    GitHooksDir,
    /// Optional project manifest read when capturing a context
    Manifest,
    /// Default Java source root
    MainJavaSources,
    /// Project-supplied pre-commit hook, preferred over the bundled one
    ProjectPreCommitHook,
    /// Root-project Checkstyle suppressions, preferred over the bundled empty set
    ProjectCheckstyleSuppressions,
    /// Generated Checkstyle directory
    GeneratedCheckstyleDir,
    /// Generated Checkstyle configuration
    GeneratedCheckstyleConfig,
    /// Generated Checkstyle suppressions
    GeneratedCheckstyleSuppressions,
    /// Staged copy of the bundled pre-commit hook
    GeneratedPreCommitHook,
}

impl ProjectPath {
    /// Get the forward-slash relative path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitMarker => ".git",
            Self::GitHooksDir => ".git/hooks",
            Self::Manifest => "conventions.toml",
            Self::MainJavaSources => "src/main/java",
            Self::ProjectPreCommitHook => "scripts/git-hooks/pre-commit",
            Self::ProjectCheckstyleSuppressions => "config/checkstyle/suppressions.xml",
            Self::GeneratedCheckstyleDir => "build/generated/checkstyle",
            Self::GeneratedCheckstyleConfig => "build/generated/checkstyle/checkstyle.xml",
            Self::GeneratedCheckstyleSuppressions => "build/generated/checkstyle/suppressions.xml",
            Self::GeneratedPreCommitHook => "build/generated/git-hooks/pre-commit",
        }
    }

    /// Resolve this location against a project directory.
    pub fn under(&self, project_dir: &Path) -> PathBuf {
        self.as_str()
            .split('/')
            .fold(project_dir.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_joins_every_segment() {
        let root = Path::new("/work/app");
        let hook = ProjectPath::ProjectPreCommitHook.under(root);
        assert_eq!(
            hook,
            root.join("scripts").join("git-hooks").join("pre-commit")
        );
    }

    #[test]
    fn generated_files_live_under_generated_dir() {
        let dir = ProjectPath::GeneratedCheckstyleDir.as_str();
        assert!(ProjectPath::GeneratedCheckstyleConfig.as_str().starts_with(dir));
        assert!(ProjectPath::GeneratedCheckstyleSuppressions.as_str().starts_with(dir));
    }
}
