//! Convention set assembly
//!
//! [`ConventionEngine`] freezes defaults and overrides, then builds one
//! immutable [`ConventionSet`] per [`ResolutionContext`]. Every declared
//! setting is resolved; the first failure aborts the build, so a set is
//! either complete or not produced at all.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use conventions_fs::ProjectPath;
use serde::Serialize;

use crate::Result;
use crate::context::ResolutionContext;
use crate::defaults::{ConventionDefaults, FormattingRules};
use crate::overrides::ConventionOverrides;
use crate::parser::Decimal;
use crate::resolver::{ConventionResolver, Resolved};
use crate::setting::{SETTINGS, SettingId, SettingValue, ValueSource};

const NULLAWAY_ANNOTATED_PACKAGES: &str = "-XepOpt:NullAway:AnnotatedPackages=";

/// Project-relative locations of generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLayout {
    pub checkstyle_dir: String,
    pub checkstyle_config: String,
    pub checkstyle_suppressions: String,
    pub pre_commit_hook: String,
}

impl Default for GeneratedLayout {
    fn default() -> Self {
        Self {
            checkstyle_dir: ProjectPath::GeneratedCheckstyleDir.as_str().to_string(),
            checkstyle_config: ProjectPath::GeneratedCheckstyleConfig.as_str().to_string(),
            checkstyle_suppressions: ProjectPath::GeneratedCheckstyleSuppressions
                .as_str()
                .to_string(),
            pre_commit_hook: ProjectPath::GeneratedPreCommitHook.as_str().to_string(),
        }
    }
}

/// Immutable snapshot of every resolved convention for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConventionSet {
    settings: BTreeMap<SettingId, Resolved>,
    errorprone_args: Vec<String>,
    compiler_args: Vec<String>,
    java_exec_jvm_args: Vec<String>,
    test_jvm_args: Vec<String>,
    excluded_tags: Vec<String>,
    formatting: FormattingRules,
    checkstyle_version: String,
    jacoco_version: String,
    layout: GeneratedLayout,
}

impl ConventionSet {
    /// Resolved value of a setting.
    pub fn value(&self, id: SettingId) -> &SettingValue {
        &self.resolved(id).value
    }

    /// Which stage supplied a setting's value.
    pub fn source(&self, id: SettingId) -> ValueSource {
        self.resolved(id).source
    }

    /// All settings with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SettingId, &Resolved)> {
        SETTINGS.iter().map(|s| (s.id, self.resolved(s.id)))
    }

    pub fn compiler_jdk_version(&self) -> i64 {
        self.integer(SettingId::CompilerJdkVersion)
    }

    /// The `--release` level handed to javac.
    pub fn bytecode_jdk_version(&self) -> i64 {
        self.integer(SettingId::BytecodeJdkVersion)
    }

    pub fn runtime_jdk_version(&self) -> i64 {
        self.integer(SettingId::RuntimeJdkVersion)
    }

    pub fn compiler_jdk_vendor(&self) -> &str {
        self.text(SettingId::CompilerJdkVendor)
    }

    pub fn runtime_jdk_vendor(&self) -> &str {
        self.text(SettingId::RuntimeJdkVendor)
    }

    /// Minimum instruction coverage ratio.
    pub fn minimum_coverage(&self) -> &Decimal {
        match self.value(SettingId::MinimumCoverage) {
            SettingValue::Decimal(d) => d,
            other => unreachable!("minimumCoverage resolved to {other:?}"),
        }
    }

    pub fn maven_local_enabled(&self) -> bool {
        self.boolean(SettingId::MavenLocalEnabled)
    }

    pub fn maven_central_enabled(&self) -> bool {
        self.boolean(SettingId::MavenCentralEnabled)
    }

    pub fn publishing_enabled(&self) -> bool {
        self.boolean(SettingId::PublishingEnabled)
    }

    pub fn publishing_github_packages_enabled(&self) -> bool {
        self.boolean(SettingId::PublishingGithubPackagesEnabled)
    }

    /// GitHub owner for package publishing; empty when unknown.
    pub fn publishing_github_owner(&self) -> &str {
        self.text(SettingId::PublishingGithubOwner)
    }

    pub fn publishing_github_repository(&self) -> &str {
        self.text(SettingId::PublishingGithubRepository)
    }

    pub fn publishing_pom_name(&self) -> &str {
        self.text(SettingId::PublishingPomName)
    }

    pub fn publishing_pom_description(&self) -> &str {
        self.text(SettingId::PublishingPomDescription)
    }

    pub fn base_package(&self) -> &str {
        self.text(SettingId::BasePackage)
    }

    /// Packages NullAway treats as annotated.
    pub fn nullaway_annotated_packages(&self) -> &str {
        self.base_package()
    }

    /// Error Prone arguments including the NullAway annotated packages option.
    pub fn errorprone_args(&self) -> &[String] {
        &self.errorprone_args
    }

    pub fn compiler_args(&self) -> &[String] {
        &self.compiler_args
    }

    pub fn java_exec_jvm_args(&self) -> &[String] {
        &self.java_exec_jvm_args
    }

    pub fn test_jvm_args(&self) -> &[String] {
        &self.test_jvm_args
    }

    /// JUnit tags excluded from test runs.
    pub fn excluded_tags(&self) -> &[String] {
        &self.excluded_tags
    }

    /// Coverage verification only runs on full test runs.
    pub fn coverage_verification_enabled(&self) -> bool {
        self.excluded_tags.is_empty()
    }

    pub fn formatting(&self) -> &FormattingRules {
        &self.formatting
    }

    pub fn checkstyle_version(&self) -> &str {
        &self.checkstyle_version
    }

    pub fn jacoco_version(&self) -> &str {
        &self.jacoco_version
    }

    pub fn layout(&self) -> &GeneratedLayout {
        &self.layout
    }

    fn resolved(&self, id: SettingId) -> &Resolved {
        self.settings
            .get(&id)
            .unwrap_or_else(|| unreachable!("{id} is resolved for every convention set"))
    }

    fn integer(&self, id: SettingId) -> i64 {
        match self.value(id) {
            SettingValue::Integer(v) => *v,
            other => unreachable!("{id} resolved to {other:?}"),
        }
    }

    fn boolean(&self, id: SettingId) -> bool {
        match self.value(id) {
            SettingValue::Boolean(v) => *v,
            other => unreachable!("{id} resolved to {other:?}"),
        }
    }

    fn text(&self, id: SettingId) -> &str {
        match self.value(id) {
            SettingValue::Text(v) => v,
            other => unreachable!("{id} resolved to {other:?}"),
        }
    }
}

/// Builds convention sets from frozen defaults and overrides.
#[derive(Debug)]
pub struct ConventionEngine {
    defaults: Arc<ConventionDefaults>,
    overrides: ConventionOverrides,
    resolver: ConventionResolver,
}

impl ConventionEngine {
    /// Freeze `defaults` and `overrides`; later changes to the caller's
    /// overrides have no effect on this engine.
    pub fn new(defaults: ConventionDefaults, overrides: ConventionOverrides) -> Self {
        let defaults = Arc::new(defaults);
        let resolver = ConventionResolver::new(Arc::clone(&defaults), overrides.clone());
        Self {
            defaults,
            overrides,
            resolver,
        }
    }

    pub fn defaults(&self) -> &ConventionDefaults {
        &self.defaults
    }

    /// Resolve every declared setting against `context`.
    pub fn build(&self, context: &ResolutionContext) -> Result<ConventionSet> {
        let mut settings = BTreeMap::new();
        for setting in SETTINGS {
            let resolved = self.resolver.resolve(setting, context)?;
            settings.insert(setting.id, resolved);
        }

        let excluded_tags = match &settings[&SettingId::ExcludedTags].value {
            SettingValue::Text(raw) => split_tags(raw),
            _ => Vec::new(),
        };
        let base_package = match &settings[&SettingId::BasePackage].value {
            SettingValue::Text(package) => package.clone(),
            other => other.to_string(),
        };

        let mut errorprone_args = self.defaults.errorprone_args.clone();
        errorprone_args.push(format!("{NULLAWAY_ANNOTATED_PACKAGES}{base_package}"));
        errorprone_args.extend(self.overrides.extra_errorprone_args().iter().cloned());

        let set = ConventionSet {
            settings,
            errorprone_args,
            compiler_args: self.defaults.compiler_args.clone(),
            java_exec_jvm_args: self
                .overrides
                .java_exec_jvm_args_override()
                .unwrap_or(&self.defaults.java_exec_jvm_args)
                .to_vec(),
            test_jvm_args: self
                .overrides
                .test_jvm_args_override()
                .unwrap_or(&self.defaults.test_jvm_args)
                .to_vec(),
            excluded_tags,
            formatting: self
                .overrides
                .formatting_override()
                .unwrap_or(&self.defaults.formatting)
                .clone(),
            checkstyle_version: self.defaults.checkstyle_version.clone(),
            jacoco_version: self.defaults.jacoco_version.clone(),
            layout: GeneratedLayout::default(),
        };

        tracing::info!(
            project = %context.project().name,
            base_package = %set.base_package(),
            "Built convention set"
        );
        Ok(set)
    }
}

impl Default for ConventionEngine {
    fn default() -> Self {
        Self::new(ConventionDefaults::default(), ConventionOverrides::default())
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A project's context paired with its lazily built convention set.
///
/// The set is built on first access and cached; a failed build is not
/// cached, so the error is reported again on the next access.
#[derive(Debug)]
pub struct ProjectConventions {
    engine: Arc<ConventionEngine>,
    context: ResolutionContext,
    cache: OnceLock<ConventionSet>,
}

impl ProjectConventions {
    pub fn new(engine: Arc<ConventionEngine>, context: ResolutionContext) -> Self {
        Self {
            engine,
            context,
            cache: OnceLock::new(),
        }
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// The convention set, building it on first use.
    pub fn get(&self) -> Result<&ConventionSet> {
        if let Some(set) = self.cache.get() {
            return Ok(set);
        }
        let built = self.engine.build(&self.context)?;
        Ok(self.cache.get_or_init(|| built))
    }
}
