//! Shared test utilities for the java-conventions workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`git`] — git repository fixtures
//! - [`project`] — [`project::TestProject`] builder for Java project layouts

pub mod git;
pub mod project;
