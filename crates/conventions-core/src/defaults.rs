//! Built-in convention defaults
//!
//! [`ConventionDefaults`] is the last stage of the resolution chain. It is an
//! immutable value constructed once and injected into the resolver, so
//! alternative defaults (an organization-wide TOML file, a test fixture) never
//! require touching global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::parser::non_blank;
use crate::setting::{SETTINGS, SettingId, SettingKind};
use crate::{Error, Result};

const DEFAULTS_DIR: &str = "java-conventions";
const DEFAULTS_FILE: &str = "defaults.toml";

/// A formatter step applied to Java sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatterStep {
    RemoveUnusedImports,
    TrimTrailingWhitespace,
    EndWithNewline,
}

/// Ordered formatter steps for Java sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingRules {
    pub steps: Vec<FormatterStep>,
}

impl FormattingRules {
    /// A rule set with no steps.
    pub fn none() -> Self {
        Self { steps: Vec::new() }
    }
}

impl Default for FormattingRules {
    fn default() -> Self {
        Self {
            steps: vec![
                FormatterStep::RemoveUnusedImports,
                FormatterStep::TrimTrailingWhitespace,
                FormatterStep::EndWithNewline,
            ],
        }
    }
}

/// Default values for every convention setting plus the list-valued
/// conventions that are not part of the priority chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConventionDefaults {
    pub jdk_version: i64,
    pub jdk_vendor: String,
    pub minimum_coverage: String,
    pub maven_local_enabled: bool,
    pub maven_central_enabled: bool,
    pub publishing_enabled: bool,
    pub publishing_github_packages_enabled: bool,
    pub java_exec_jvm_args: Vec<String>,
    pub test_jvm_args: Vec<String>,
    /// Error Prone arguments; the NullAway annotated-packages option is added per project
    pub errorprone_args: Vec<String>,
    pub compiler_args: Vec<String>,
    pub formatting: FormattingRules,
    pub checkstyle_version: String,
    pub jacoco_version: String,
}

impl Default for ConventionDefaults {
    fn default() -> Self {
        Self {
            jdk_version: 25,
            jdk_vendor: "adoptium".to_string(),
            minimum_coverage: "0.85".to_string(),
            maven_local_enabled: false,
            maven_central_enabled: true,
            publishing_enabled: true,
            publishing_github_packages_enabled: true,
            java_exec_jvm_args: Vec::new(),
            test_jvm_args: Vec::new(),
            errorprone_args: vec![
                "-Xep:NullAway:ERROR".to_string(),
                "-Xep:FutureReturnValueIgnored:OFF".to_string(),
            ],
            compiler_args: vec!["-XDaddTypeAnnotationsToSymbol=true".to_string()],
            formatting: FormattingRules::default(),
            checkstyle_version: "12.1.2".to_string(),
            jacoco_version: "0.8.14".to_string(),
        }
    }
}

impl ConventionDefaults {
    /// Parse defaults from TOML; missing keys keep their built-in values.
    ///
    /// Every static default must parse as its setting's kind, so a bad file
    /// fails here rather than at resolution time.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        let defaults: Self = toml::from_str(content).map_err(|e| Error::ManifestParse {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Check that each static default of a non-text setting is a valid value.
    pub fn validate(&self) -> Result<()> {
        for setting in SETTINGS.iter().filter(|s| s.kind != SettingKind::Text) {
            let Some(raw) = self.raw_default(setting.id) else {
                continue;
            };
            match non_blank(Some(&raw)) {
                Some(value) => {
                    setting.parse_value(value)?;
                }
                None => {
                    return Err(Error::invalid_value(
                        setting.name(),
                        raw,
                        "a non-blank default",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Load defaults from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = conventions_fs::io::read_text(path)?;
        Self::from_toml(&content, path)
    }

    /// Load the user-level defaults file if it exists, else the built-ins.
    ///
    /// The file lives at `<config_dir>/java-conventions/defaults.toml`
    /// (`~/.config/java-conventions/defaults.toml` on Linux).
    pub fn discover() -> Result<Self> {
        match Self::user_defaults_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(?path, "Loading user defaults");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Platform location of the user-level defaults file.
    pub fn user_defaults_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(DEFAULTS_DIR).join(DEFAULTS_FILE))
    }

    /// Raw default for a setting, `None` when the setting has no static default.
    pub fn raw_default(&self, id: SettingId) -> Option<String> {
        match id {
            SettingId::CompilerJdkVersion
            | SettingId::BytecodeJdkVersion
            | SettingId::RuntimeJdkVersion => Some(self.jdk_version.to_string()),
            SettingId::CompilerJdkVendor | SettingId::RuntimeJdkVendor => {
                Some(self.jdk_vendor.clone())
            }
            SettingId::MinimumCoverage => Some(self.minimum_coverage.clone()),
            SettingId::MavenLocalEnabled => Some(self.maven_local_enabled.to_string()),
            SettingId::MavenCentralEnabled => Some(self.maven_central_enabled.to_string()),
            SettingId::PublishingEnabled => Some(self.publishing_enabled.to_string()),
            SettingId::PublishingGithubPackagesEnabled => {
                Some(self.publishing_github_packages_enabled.to_string())
            }
            SettingId::PublishingGithubOwner | SettingId::ExcludedTags => Some(String::new()),
            SettingId::PublishingGithubRepository
            | SettingId::PublishingPomName
            | SettingId::PublishingPomDescription
            | SettingId::BasePackage => None,
        }
    }
}
