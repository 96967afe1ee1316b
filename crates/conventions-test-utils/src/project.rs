//! [`TestProject`] builder for Java project layouts.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary Java project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use conventions_test_utils::project::TestProject;
///
/// let project = TestProject::new("demo");
/// project.write_source("com/example/app/Sample.java");
/// project.init_git();
/// project.assert_file_exists("src/main/java/com/example/app/Sample.java");
/// ```
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    /// Create an empty project directory named `name` inside a temp dir.
    ///
    /// The directory name doubles as the default project name.
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(name);
        fs::create_dir_all(&root).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` to `path` relative to the root, creating parents.
    pub fn write(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write a Java class under `src/main/java`, deriving the package
    /// declaration from the relative path.
    pub fn write_source(&self, relative: &str) -> PathBuf {
        let (package_dir, file) = relative.rsplit_once('/').unwrap_or(("", relative));
        let class = file.trim_end_matches(".java");
        let mut content = String::new();
        if !package_dir.is_empty() {
            content.push_str(&format!("package {};\n\n", package_dir.replace('/', ".")));
        }
        content.push_str(&format!("public class {class} {{}}\n"));
        self.write(&format!("src/main/java/{relative}"), content)
    }

    /// Write a `conventions.toml` manifest.
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        self.write("conventions.toml", content)
    }

    /// Initialise the directory as a real git repository using `git2`.
    pub fn init_git(&self) -> git2::Repository {
        crate::git::real_git_repo(&self.root)
    }

    /// Read a file relative to the root as bytes.
    pub fn read(&self, path: &str) -> Vec<u8> {
        let full_path = self.root.join(path);
        fs::read(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
