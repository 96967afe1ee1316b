//! Static resources compiled into the binary.

use crate::{Error, Result};

/// Bundled Checkstyle configuration.
pub const CHECKSTYLE_CONFIG: &str = "checkstyle/checkstyle.xml";
/// Bundled suppressions used when the project has none.
pub const CHECKSTYLE_EMPTY_SUPPRESSIONS: &str = "checkstyle/empty-suppressions.xml";
/// Bundled git pre-commit hook.
pub const PRE_COMMIT_HOOK: &str = "git-hooks/pre-commit";

/// A named, embedded resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledResource {
    pub name: &'static str,
    pub content: &'static [u8],
}

static BUILTIN: &[BundledResource] = &[
    BundledResource {
        name: CHECKSTYLE_CONFIG,
        content: include_bytes!("../resources/checkstyle/checkstyle.xml"),
    },
    BundledResource {
        name: CHECKSTYLE_EMPTY_SUPPRESSIONS,
        content: include_bytes!("../resources/checkstyle/empty-suppressions.xml"),
    },
    BundledResource {
        name: PRE_COMMIT_HOOK,
        content: include_bytes!("../resources/git-hooks/pre-commit"),
    },
];

/// Lookup table of bundled resources.
#[derive(Debug, Clone, Copy)]
pub struct BundledResources {
    entries: &'static [BundledResource],
}

impl BundledResources {
    /// The resources shipped with this crate.
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// A custom table, e.g. to exercise packaging defects in tests.
    pub fn from_entries(entries: &'static [BundledResource]) -> Self {
        Self { entries }
    }

    /// Content of the resource called `name`.
    ///
    /// A missing resource is a packaging defect and always fatal.
    pub fn get(&self, name: &str) -> Result<&'static [u8]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.content)
            .ok_or_else(|| Error::MissingBundledResource {
                name: name.to_string(),
            })
    }
}

impl Default for BundledResources {
    fn default() -> Self {
        Self::builtin()
    }
}
