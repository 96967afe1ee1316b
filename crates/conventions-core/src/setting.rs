//! The declared convention settings
//!
//! Each [`Setting`] is a static declaration: a stable name, a value kind, the
//! environment variable and project property that may supply it, and an
//! optional inference. Defaults are not part of the declaration; they come
//! from the injected [`ConventionDefaults`](crate::ConventionDefaults).

use std::fmt;

use serde::Serialize;

use crate::parser::{self, Decimal};
use crate::{Error, Result};

/// Stable identifier of a convention setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingId {
    CompilerJdkVersion,
    BytecodeJdkVersion,
    RuntimeJdkVersion,
    CompilerJdkVendor,
    RuntimeJdkVendor,
    MinimumCoverage,
    MavenLocalEnabled,
    MavenCentralEnabled,
    PublishingEnabled,
    PublishingGithubPackagesEnabled,
    PublishingGithubOwner,
    PublishingGithubRepository,
    PublishingPomName,
    PublishingPomDescription,
    BasePackage,
    ExcludedTags,
}

impl SettingId {
    /// The camelCase name used on every configuration surface.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CompilerJdkVersion => "compilerJdkVersion",
            Self::BytecodeJdkVersion => "bytecodeJdkVersion",
            Self::RuntimeJdkVersion => "runtimeJdkVersion",
            Self::CompilerJdkVendor => "compilerJdkVendor",
            Self::RuntimeJdkVendor => "runtimeJdkVendor",
            Self::MinimumCoverage => "minimumCoverage",
            Self::MavenLocalEnabled => "mavenLocalEnabled",
            Self::MavenCentralEnabled => "mavenCentralEnabled",
            Self::PublishingEnabled => "publishingEnabled",
            Self::PublishingGithubPackagesEnabled => "publishingGithubPackagesEnabled",
            Self::PublishingGithubOwner => "publishingGithubOwner",
            Self::PublishingGithubRepository => "publishingGithubRepository",
            Self::PublishingPomName => "publishingPomName",
            Self::PublishingPomDescription => "publishingPomDescription",
            Self::BasePackage => "basePackage",
            Self::ExcludedTags => "excludedTags",
        }
    }

    /// Look up a setting by its name.
    pub fn parse(name: &str) -> Result<Self> {
        SETTINGS
            .iter()
            .map(|setting| setting.id)
            .find(|id| id.name() == name)
            .ok_or_else(|| Error::UnknownSetting {
                name: name.to_string(),
            })
    }

    /// The declaration for this setting.
    pub fn setting(&self) -> &'static Setting {
        SETTINGS
            .iter()
            .find(|setting| setting.id == *self)
            .unwrap_or_else(|| unreachable!("every SettingId is declared in SETTINGS"))
    }
}

impl fmt::Display for SettingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Boolean,
    Integer,
    Decimal,
    Text,
}

/// Extra validation or normalization applied after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    None,
    /// Integer must be at least 1
    Positive,
    /// Decimal must lie in `[0, 1]`
    UnitInterval,
    /// Text is lower-cased
    Lowercase,
}

/// How a missing value may be derived from project structure or metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inference {
    /// Shallowest package holding Java sources
    BasePackage,
    /// Owner from `GITHUB_REPOSITORY`, the origin remote, or an `io.github.*` group
    GithubOwner,
    /// The project name
    ProjectName,
    /// The project description, else its name
    ProjectDescription,
}

/// Declaration of a single convention setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    pub id: SettingId,
    pub kind: SettingKind,
    pub constraint: Constraint,
    pub env: Option<&'static str>,
    pub property: Option<&'static str>,
    pub inference: Option<Inference>,
    pub required: bool,
}

impl Setting {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// The key a user would configure, for error messages.
    pub fn configuration_key(&self) -> &'static str {
        self.property.or(self.env).unwrap_or_else(|| self.name())
    }

    /// Parse a non-blank raw candidate into a typed value.
    pub fn parse_value(&self, raw: &str) -> Result<SettingValue> {
        let name = self.name();
        let value = match self.kind {
            SettingKind::Boolean => SettingValue::Boolean(parser::boolean(name, raw)?),
            SettingKind::Integer => SettingValue::Integer(parser::integer(name, raw)?),
            SettingKind::Decimal => SettingValue::Decimal(parser::decimal(name, raw)?),
            SettingKind::Text => SettingValue::Text(raw.trim().to_string()),
        };
        self.constrain(value)
    }

    fn constrain(&self, value: SettingValue) -> Result<SettingValue> {
        match (self.constraint, value) {
            (Constraint::Positive, SettingValue::Integer(v)) if v < 1 => Err(
                Error::invalid_value(self.name(), v.to_string(), "a positive integer"),
            ),
            (Constraint::UnitInterval, SettingValue::Decimal(d))
                if !(0.0..=1.0).contains(&d.value()) =>
            {
                Err(Error::invalid_value(
                    self.name(),
                    d.as_str(),
                    "a ratio between 0 and 1",
                ))
            }
            (Constraint::Lowercase, SettingValue::Text(t)) => {
                Ok(SettingValue::Text(t.to_lowercase()))
            }
            (_, value) => Ok(value),
        }
    }
}

/// A resolved, typed setting value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// The stage of the priority chain that supplied a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Override,
    Environment,
    Property,
    Inference,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Environment => write!(f, "environment"),
            Self::Property => write!(f, "property"),
            Self::Inference => write!(f, "inference"),
            Self::Default => write!(f, "default"),
        }
    }
}

const fn declare(
    id: SettingId,
    kind: SettingKind,
    env: Option<&'static str>,
    property: &'static str,
) -> Setting {
    Setting {
        id,
        kind,
        constraint: Constraint::None,
        env,
        property: Some(property),
        inference: None,
        required: false,
    }
}

const fn with_constraint(mut setting: Setting, constraint: Constraint) -> Setting {
    setting.constraint = constraint;
    setting
}

const fn inferred(mut setting: Setting, inference: Inference) -> Setting {
    setting.inference = Some(inference);
    setting
}

const fn required(mut setting: Setting) -> Setting {
    setting.required = true;
    setting
}

/// Every declared setting, in resolution order.
pub static SETTINGS: &[Setting] = &[
    with_constraint(
        declare(
            SettingId::CompilerJdkVersion,
            SettingKind::Integer,
            Some("CONVENTIONS_COMPILER_JDK_VERSION"),
            "conventions.java.compilerJdkVersion",
        ),
        Constraint::Positive,
    ),
    with_constraint(
        declare(
            SettingId::BytecodeJdkVersion,
            SettingKind::Integer,
            Some("CONVENTIONS_BYTECODE_JDK_VERSION"),
            "conventions.java.bytecodeJdkVersion",
        ),
        Constraint::Positive,
    ),
    with_constraint(
        declare(
            SettingId::RuntimeJdkVersion,
            SettingKind::Integer,
            Some("CONVENTIONS_RUNTIME_JDK_VERSION"),
            "conventions.java.runtimeJdkVersion",
        ),
        Constraint::Positive,
    ),
    with_constraint(
        declare(
            SettingId::CompilerJdkVendor,
            SettingKind::Text,
            Some("CONVENTIONS_COMPILER_JDK_VENDOR"),
            "conventions.java.compilerJdkVendor",
        ),
        Constraint::Lowercase,
    ),
    with_constraint(
        declare(
            SettingId::RuntimeJdkVendor,
            SettingKind::Text,
            Some("CONVENTIONS_RUNTIME_JDK_VENDOR"),
            "conventions.java.runtimeJdkVendor",
        ),
        Constraint::Lowercase,
    ),
    with_constraint(
        declare(
            SettingId::MinimumCoverage,
            SettingKind::Decimal,
            Some("CONVENTIONS_MINIMUM_COVERAGE"),
            "conventions.coverage.minimum",
        ),
        Constraint::UnitInterval,
    ),
    declare(
        SettingId::MavenLocalEnabled,
        SettingKind::Boolean,
        Some("CONVENTIONS_MAVEN_LOCAL_ENABLED"),
        "conventions.repositories.mavenLocal.enabled",
    ),
    declare(
        SettingId::MavenCentralEnabled,
        SettingKind::Boolean,
        Some("CONVENTIONS_MAVEN_CENTRAL_ENABLED"),
        "conventions.repositories.mavenCentral.enabled",
    ),
    declare(
        SettingId::PublishingEnabled,
        SettingKind::Boolean,
        Some("CONVENTIONS_PUBLISHING_ENABLED"),
        "conventions.publishing.enabled",
    ),
    declare(
        SettingId::PublishingGithubPackagesEnabled,
        SettingKind::Boolean,
        Some("CONVENTIONS_PUBLISHING_GITHUB_PACKAGES_ENABLED"),
        "conventions.publishing.githubPackages.enabled",
    ),
    inferred(
        declare(
            SettingId::PublishingGithubOwner,
            SettingKind::Text,
            Some("GITHUB_REPOSITORY_OWNER"),
            "conventions.publishing.github.owner",
        ),
        Inference::GithubOwner,
    ),
    inferred(
        declare(
            SettingId::PublishingGithubRepository,
            SettingKind::Text,
            None,
            "conventions.publishing.github.repository",
        ),
        Inference::ProjectName,
    ),
    inferred(
        declare(
            SettingId::PublishingPomName,
            SettingKind::Text,
            None,
            "conventions.publishing.pom.name",
        ),
        Inference::ProjectName,
    ),
    inferred(
        declare(
            SettingId::PublishingPomDescription,
            SettingKind::Text,
            None,
            "conventions.publishing.pom.description",
        ),
        Inference::ProjectDescription,
    ),
    required(inferred(
        declare(
            SettingId::BasePackage,
            SettingKind::Text,
            Some("CONVENTIONS_BASE_PACKAGE"),
            "conventions.basePackage",
        ),
        Inference::BasePackage,
    )),
    declare(
        SettingId::ExcludedTags,
        SettingKind::Text,
        Some("CONVENTIONS_EXCLUDE_TAGS"),
        "excludeTags",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_round_trip_through_parse() {
        for setting in SETTINGS {
            assert_eq!(SettingId::parse(setting.name()).unwrap(), setting.id);
            assert_eq!(setting.id.setting(), setting);
        }
    }

    #[test]
    fn aliases_are_unique() {
        let mut seen = HashSet::new();
        for setting in SETTINGS {
            assert!(seen.insert(setting.name()));
            if let Some(env) = setting.env {
                assert!(seen.insert(env), "duplicate env alias {env}");
            }
            if let Some(property) = setting.property {
                assert!(seen.insert(property), "duplicate property {property}");
            }
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            SettingId::parse("jdkVersion"),
            Err(Error::UnknownSetting { name }) if name == "jdkVersion"
        ));
    }

    #[test]
    fn constraints_reject_out_of_range_values() {
        let coverage = SettingId::MinimumCoverage.setting();
        assert!(coverage.parse_value("1.5").is_err());
        assert!(coverage.parse_value("-0.1").is_err());
        assert_eq!(
            coverage.parse_value("1").unwrap(),
            SettingValue::Decimal(Decimal::parse("1").unwrap())
        );

        let version = SettingId::CompilerJdkVersion.setting();
        assert!(version.parse_value("0").is_err());
        assert_eq!(version.parse_value("21").unwrap(), SettingValue::Integer(21));
    }

    #[test]
    fn vendors_are_lowercased() {
        let vendor = SettingId::RuntimeJdkVendor.setting();
        assert_eq!(
            vendor.parse_value(" Azul ").unwrap(),
            SettingValue::Text("azul".to_string())
        );
    }

    #[test]
    fn only_base_package_is_required() {
        let required: Vec<_> = SETTINGS.iter().filter(|s| s.required).map(|s| s.id).collect();
        assert_eq!(required, vec![SettingId::BasePackage]);
    }
}
