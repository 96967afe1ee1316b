//! Git lookups for Java project conventions
//!
//! Reads the few facts the conventions need from a working copy: the
//! `origin` remote URL, the directory git runs hooks from, and the GitHub
//! owner encoded in a remote URL or `owner/repo` slug.

pub mod error;
pub mod github;
pub mod hooks;
pub mod remote;

pub use error::{Error, Result};
pub use github::{GithubRepository, parse_remote_url, parse_slug};
pub use hooks::hooks_dir;
pub use remote::origin_url;
