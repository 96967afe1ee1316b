//! Project manifest (`conventions.toml`)
//!
//! Optional per-project file supplying metadata and project properties when
//! no host build runtime is around to provide them.
//!
//! ```toml
//! [project]
//! group = "io.github.acme"
//! name = "widgets"
//! description = "Widget library"
//! source-roots = ["src/main/java"]
//!
//! [properties]
//! "conventions.coverage.minimum" = "0.9"
//! "conventions.publishing.enabled" = false
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// `[project]` table of the manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectSection {
    pub group: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_roots: Option<Vec<String>>,
}

/// Parsed `conventions.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectManifest {
    pub project: ProjectSection,
    properties: BTreeMap<String, toml::Value>,
}

impl ProjectManifest {
    /// Parse manifest content; `origin` is only used for error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ManifestParse {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load the manifest at `path`, or an empty one when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        tracing::debug!(?path, "Loading project manifest");
        let content = conventions_fs::io::read_text(path)?;
        Self::parse(&content, path)
    }

    /// Project properties as strings; scalars other than strings keep their TOML spelling.
    pub fn properties(&self) -> BTreeMap<String, String> {
        self.properties
            .iter()
            .map(|(key, value)| {
                let raw = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), raw)
            })
            .collect()
    }
}
