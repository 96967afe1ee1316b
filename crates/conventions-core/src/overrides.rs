//! Explicit overrides, collected before a convention set is built
//!
//! [`ConventionOverrides`] is the mutable half of the two-phase contract:
//! hosts record overrides while configuring a project, then hand a frozen
//! copy to [`ConventionEngine`](crate::ConventionEngine). Values are stored
//! raw and validated by the same parser as every other source.

use std::collections::BTreeMap;

use crate::Result;
use crate::defaults::FormattingRules;
use crate::setting::SettingId;

/// Overrides with the highest priority in the resolution chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConventionOverrides {
    values: BTreeMap<SettingId, String>,
    java_exec_jvm_args: Option<Vec<String>>,
    test_jvm_args: Option<Vec<String>>,
    extra_errorprone_args: Vec<String>,
    formatting: Option<FormattingRules>,
}

impl ConventionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a setting by name, e.g. `("minimumCoverage", "0.9")`.
    pub fn set(&mut self, name: &str, raw: impl Into<String>) -> Result<&mut Self> {
        let id = SettingId::parse(name)?;
        Ok(self.set_id(id, raw))
    }

    /// Override a setting by id.
    pub fn set_id(&mut self, id: SettingId, raw: impl Into<String>) -> &mut Self {
        self.values.insert(id, raw.into());
        self
    }

    /// Keep compiler, bytecode and runtime JDK versions aligned.
    pub fn jdk_version(&mut self, version: i64) -> &mut Self {
        self.compiler_jdk_version(version)
            .bytecode_jdk_version(version)
            .runtime_jdk_version(version)
    }

    pub fn compiler_jdk_version(&mut self, version: i64) -> &mut Self {
        self.set_id(SettingId::CompilerJdkVersion, version.to_string())
    }

    pub fn bytecode_jdk_version(&mut self, version: i64) -> &mut Self {
        self.set_id(SettingId::BytecodeJdkVersion, version.to_string())
    }

    pub fn runtime_jdk_version(&mut self, version: i64) -> &mut Self {
        self.set_id(SettingId::RuntimeJdkVersion, version.to_string())
    }

    /// Keep compiler and runtime JDK vendors aligned.
    pub fn jdk_vendor(&mut self, vendor: &str) -> &mut Self {
        self.compiler_jdk_vendor(vendor).runtime_jdk_vendor(vendor)
    }

    pub fn compiler_jdk_vendor(&mut self, vendor: &str) -> &mut Self {
        self.set_id(SettingId::CompilerJdkVendor, vendor)
    }

    pub fn runtime_jdk_vendor(&mut self, vendor: &str) -> &mut Self {
        self.set_id(SettingId::RuntimeJdkVendor, vendor)
    }

    pub fn minimum_coverage(&mut self, ratio: &str) -> &mut Self {
        self.set_id(SettingId::MinimumCoverage, ratio)
    }

    pub fn base_package(&mut self, package: &str) -> &mut Self {
        self.set_id(SettingId::BasePackage, package)
    }

    /// Replace the JVM arguments for JavaExec-style launches.
    pub fn java_exec_jvm_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.java_exec_jvm_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the JVM arguments for test launches.
    pub fn test_jvm_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_jvm_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Append Error Prone arguments after the defaults.
    pub fn errorprone_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_errorprone_args
            .extend(args.into_iter().map(Into::into));
        self
    }

    /// Replace the formatter rule set.
    pub fn formatting(&mut self, rules: FormattingRules) -> &mut Self {
        self.formatting = Some(rules);
        self
    }

    /// Raw override for a setting, if any.
    pub fn get(&self, id: SettingId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    pub(crate) fn java_exec_jvm_args_override(&self) -> Option<&[String]> {
        self.java_exec_jvm_args.as_deref()
    }

    pub(crate) fn test_jvm_args_override(&self) -> Option<&[String]> {
        self.test_jvm_args.as_deref()
    }

    pub(crate) fn extra_errorprone_args(&self) -> &[String] {
        &self.extra_errorprone_args
    }

    pub(crate) fn formatting_override(&self) -> Option<&FormattingRules> {
        self.formatting.as_ref()
    }
}
