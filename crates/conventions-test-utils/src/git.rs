//! Git repository fixtures.
//!
//! Choose the lowest-realism fixture that satisfies the test: a fake `.git`
//! directory is enough for marker detection, a real repository is needed for
//! anything that opens it through git2.

use std::fs;
use std::path::Path;

/// Creates a minimal `.git` directory structure **without** initialising a real
/// git repository.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
    fs::create_dir_all(path.join(".git/refs/heads"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create refs/heads: {e}"));
}

/// Initialises a real git repository using `git2` (no commits).
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real git repository with an `origin` remote.
///
/// # Panics
/// Panics if the repository or remote cannot be created.
pub fn git_repo_with_origin(path: &Path, url: &str) -> git2::Repository {
    let repo = real_git_repo(path);
    repo.remote("origin", url)
        .unwrap_or_else(|e| panic!("git_repo_with_origin: failed to add origin {url}: {e}"));
    repo
}

/// Initialises a real git repository with one empty commit on `HEAD`.
///
/// Needed for anything that requires history, such as adding a worktree.
///
/// # Panics
/// Panics if the repository or commit cannot be created.
pub fn git_repo_with_commit(path: &Path) -> git2::Repository {
    let repo = real_git_repo(path);
    {
        let signature = git2::Signature::now("Test User", "test@test.com")
            .unwrap_or_else(|e| panic!("git_repo_with_commit: failed to build signature: {e}"));
        let tree_id = repo
            .index()
            .and_then(|mut index| index.write_tree())
            .unwrap_or_else(|e| panic!("git_repo_with_commit: failed to write tree: {e}"));
        let tree = repo
            .find_tree(tree_id)
            .unwrap_or_else(|e| panic!("git_repo_with_commit: failed to find tree: {e}"));
        repo.commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])
            .unwrap_or_else(|e| panic!("git_repo_with_commit: failed to commit: {e}"));
    }
    repo
}
