//! Remote lookups.

use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::Result;

const ORIGIN: &str = "origin";

/// Get the URL of the `origin` remote of the repository at `dir`.
///
/// Returns `None` when `dir` is not inside a git repository, when there is
/// no `origin` remote, or when the remote has no (UTF-8) URL.
pub fn origin_url(dir: &Path) -> Result<Option<String>> {
    let repo = match Repository::discover(dir) {
        Ok(repo) => repo,
        Err(e) if e.code() == ErrorCode::NotFound => {
            tracing::debug!(dir = %dir.display(), "No git repository found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let remote = match repo.find_remote(ORIGIN) {
        Ok(remote) => remote,
        Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
            tracing::debug!(dir = %dir.display(), "Repository has no origin remote");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    Ok(remote.url().map(str::to_string))
}
