//! Command implementations

mod checkstyle;
mod hooks;
mod resolve;
mod settings;
mod setup;

pub use checkstyle::run_write_checkstyle;
pub use hooks::run_install_hooks;
pub use resolve::run_resolve;
pub use settings::run_settings;
pub use setup::run_setup;

use std::path::Path;

use conventions_core::{
    ConventionDefaults, ConventionEngine, ConventionOverrides, ConventionSet, ResolutionContext,
};

use crate::cli::ResolveArgs;
use crate::error::Result;

/// Load defaults from `path`, or the user defaults file when none is given.
pub(crate) fn load_defaults(path: Option<&Path>) -> Result<ConventionDefaults> {
    let defaults = match path {
        Some(path) => ConventionDefaults::load(path)?,
        None => ConventionDefaults::discover()?,
    };
    Ok(defaults)
}

/// Convenience flags apply first so a matching `--set` wins over them.
pub(crate) fn build_overrides(inputs: &ResolveArgs) -> Result<ConventionOverrides> {
    let mut overrides = ConventionOverrides::new();
    if let Some(version) = inputs.jdk_version {
        overrides.jdk_version(version);
    }
    if let Some(vendor) = &inputs.jdk_vendor {
        overrides.jdk_vendor(vendor);
    }
    for (name, value) in &inputs.overrides {
        overrides.set(name, value.clone())?;
    }
    Ok(overrides)
}

/// Snapshot of the process environment; variables whose name or value is
/// not UTF-8 cannot name or feed a setting and are skipped.
pub(crate) fn process_env() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                tracing::debug!(%key, "Skipping non UTF-8 environment variable");
                None
            }
        })
        .collect()
}

/// Capture the project with the process environment and resolve it.
pub(crate) fn resolve_project(
    project_dir: &Path,
    inputs: &ResolveArgs,
) -> Result<(ResolutionContext, ConventionSet)> {
    let engine = ConventionEngine::new(
        load_defaults(inputs.defaults.as_deref())?,
        build_overrides(inputs)?,
    );
    let context =
        ResolutionContext::capture(project_dir, process_env(), inputs.properties.clone())?;
    let set = engine.build(&context)?;
    Ok((context, set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use conventions_core::SettingId;

    #[test]
    fn set_overrides_win_over_convenience_flags() {
        let inputs = ResolveArgs {
            jdk_version: Some(21),
            overrides: vec![("runtimeJdkVersion".to_string(), "25".to_string())],
            ..ResolveArgs::default()
        };

        let overrides = build_overrides(&inputs).unwrap();

        assert_eq!(overrides.get(SettingId::CompilerJdkVersion), Some("21"));
        assert_eq!(overrides.get(SettingId::RuntimeJdkVersion), Some("25"));
    }

    #[test]
    fn unknown_override_name_is_rejected() {
        let inputs = ResolveArgs {
            overrides: vec![("jdkVersion".to_string(), "21".to_string())],
            ..ResolveArgs::default()
        };

        let err = build_overrides(&inputs).unwrap_err();

        assert!(err.to_string().contains("jdkVersion"));
    }
}
