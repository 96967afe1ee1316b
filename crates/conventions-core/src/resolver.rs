//! Convention resolution
//!
//! A setting is resolved by walking an ordered list of [`ResolutionStage`]s
//! and stopping at the first one that offers a non-blank candidate. The
//! candidate is parsed according to the setting's declaration; parse errors
//! and inference errors propagate instead of falling through.
//!
//! The standard chain is fixed:
//!
//! 1. **Override** - [`ConventionOverrides`] recorded by the host
//! 2. **Environment** - the setting's environment variable
//! 3. **Property** - the setting's project property
//! 4. **Inference** - derived from sources or project metadata
//! 5. **Default** - [`ConventionDefaults`]
//!
//! Environment beats property for every setting because the chain is shared,
//! not declared per setting.

use std::sync::Arc;

use crate::context::ResolutionContext;
use crate::defaults::ConventionDefaults;
use crate::inference;
use crate::overrides::ConventionOverrides;
use crate::parser::non_blank;
use crate::setting::{Inference, Setting, SettingKind, SettingValue, ValueSource};
use crate::{Error, Result};

/// One step of the priority chain.
pub trait ResolutionStage: Send + Sync {
    /// Which source this stage represents.
    fn source(&self) -> ValueSource;

    /// Offer a raw candidate for `setting`, or `None` to defer to the next stage.
    fn candidate(&self, setting: &Setting, context: &ResolutionContext) -> Result<Option<String>>;
}

/// Explicit host overrides.
#[derive(Debug, Clone, Default)]
pub struct OverrideStage {
    overrides: ConventionOverrides,
}

impl OverrideStage {
    pub fn new(overrides: ConventionOverrides) -> Self {
        Self { overrides }
    }
}

impl ResolutionStage for OverrideStage {
    fn source(&self) -> ValueSource {
        ValueSource::Override
    }

    fn candidate(&self, setting: &Setting, _context: &ResolutionContext) -> Result<Option<String>> {
        Ok(self.overrides.get(setting.id).map(str::to_string))
    }
}

/// The setting's environment variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentStage;

impl ResolutionStage for EnvironmentStage {
    fn source(&self) -> ValueSource {
        ValueSource::Environment
    }

    fn candidate(&self, setting: &Setting, context: &ResolutionContext) -> Result<Option<String>> {
        Ok(setting
            .env
            .and_then(|key| context.env(key))
            .map(str::to_string))
    }
}

/// The setting's project property.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyStage;

impl ResolutionStage for PropertyStage {
    fn source(&self) -> ValueSource {
        ValueSource::Property
    }

    fn candidate(&self, setting: &Setting, context: &ResolutionContext) -> Result<Option<String>> {
        Ok(setting
            .property
            .and_then(|key| context.property(key))
            .map(str::to_string))
    }
}

/// Values derived from project structure and metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceStage;

impl ResolutionStage for InferenceStage {
    fn source(&self) -> ValueSource {
        ValueSource::Inference
    }

    fn candidate(&self, setting: &Setting, context: &ResolutionContext) -> Result<Option<String>> {
        match setting.inference {
            None => Ok(None),
            Some(Inference::BasePackage) => inference::infer_base_package(context.sources()),
            Some(Inference::GithubOwner) => Ok(inference::infer_github_owner(context)),
            Some(Inference::ProjectName) => Ok(inference::project_name(context)),
            Some(Inference::ProjectDescription) => Ok(inference::project_description(context)),
        }
    }
}

/// Injected defaults.
#[derive(Debug, Clone, Default)]
pub struct DefaultStage {
    defaults: Arc<ConventionDefaults>,
}

impl DefaultStage {
    pub fn new(defaults: Arc<ConventionDefaults>) -> Self {
        Self { defaults }
    }
}

impl ResolutionStage for DefaultStage {
    fn source(&self) -> ValueSource {
        ValueSource::Default
    }

    fn candidate(&self, setting: &Setting, _context: &ResolutionContext) -> Result<Option<String>> {
        Ok(self.defaults.raw_default(setting.id))
    }
}

/// A resolved value together with the stage that supplied it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Resolved {
    pub value: SettingValue,
    pub source: ValueSource,
}

/// Resolves settings against a context through an ordered stage list.
pub struct ConventionResolver {
    stages: Vec<Box<dyn ResolutionStage>>,
}

impl ConventionResolver {
    /// The standard chain: override, environment, property, inference, default.
    pub fn new(defaults: Arc<ConventionDefaults>, overrides: ConventionOverrides) -> Self {
        Self::with_stages(vec![
            Box::new(OverrideStage::new(overrides)),
            Box::new(EnvironmentStage),
            Box::new(PropertyStage),
            Box::new(InferenceStage),
            Box::new(DefaultStage::new(defaults)),
        ])
    }

    /// A resolver with a custom stage list, evaluated in order.
    pub fn with_stages(stages: Vec<Box<dyn ResolutionStage>>) -> Self {
        Self { stages }
    }

    /// Sources of the configured stages, in evaluation order.
    pub fn chain(&self) -> Vec<ValueSource> {
        self.stages.iter().map(|stage| stage.source()).collect()
    }

    /// Resolve one setting.
    ///
    /// Non-required text settings whose chain yields nothing resolve to the
    /// empty string (e.g. an uninferable GitHub owner). Other non-required
    /// settings only end up empty through a blank default, reported as
    /// [`Error::InvalidPropertyValue`]. A required setting without a value is
    /// a [`Error::MissingRequiredSetting`].
    pub fn resolve(&self, setting: &Setting, context: &ResolutionContext) -> Result<Resolved> {
        for stage in &self.stages {
            let candidate = stage.candidate(setting, context)?;
            if let Some(raw) = non_blank(candidate.as_deref()) {
                let value = setting.parse_value(raw)?;
                tracing::debug!(
                    setting = setting.name(),
                    source = %stage.source(),
                    %value,
                    "Resolved setting"
                );
                return Ok(Resolved {
                    value,
                    source: stage.source(),
                });
            }
        }

        if !setting.required && setting.kind == SettingKind::Text {
            tracing::debug!(setting = setting.name(), "No value found, using empty text");
            return Ok(Resolved {
                value: SettingValue::Text(String::new()),
                source: ValueSource::Default,
            });
        }

        if !setting.required {
            return Err(Error::invalid_value(setting.name(), "", "a non-blank default"));
        }

        Err(Error::MissingRequiredSetting {
            name: setting.name().to_string(),
            property: setting.configuration_key().to_string(),
        })
    }
}

impl std::fmt::Debug for ConventionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConventionResolver")
            .field("chain", &self.chain())
            .finish()
    }
}
