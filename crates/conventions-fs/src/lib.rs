//! Filesystem helpers for Java project conventions
//!
//! Provides normalized relative paths, the well-known project locations the
//! conventions read from and write to, and atomic file installs.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
