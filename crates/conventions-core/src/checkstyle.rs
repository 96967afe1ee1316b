//! Checkstyle configuration materialization
//!
//! Writes the bundled Checkstyle configuration into the project's generated
//! directory together with a suppressions file: the root project's
//! `config/checkstyle/suppressions.xml` when it exists, otherwise the bundled
//! empty suppressions.

use std::path::{Path, PathBuf};

use conventions_fs::{ProjectPath, io};

use crate::Result;
use crate::resources::{BundledResources, CHECKSTYLE_CONFIG, CHECKSTYLE_EMPTY_SUPPRESSIONS};

/// Where the suppressions file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppressionsSource {
    /// Copied from the root project
    Project(PathBuf),
    /// Bundled empty suppressions
    Bundled,
}

/// Files written by [`write_checkstyle_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckstyleFiles {
    pub config: PathBuf,
    pub suppressions: PathBuf,
    pub suppressions_source: SuppressionsSource,
}

/// Write Checkstyle config and suppressions under `project_dir/build/generated/checkstyle`.
///
/// `root_dir` is the root project of a multi-project build; pass
/// `project_dir` for single-project builds.
pub fn write_checkstyle_config(
    project_dir: &Path,
    root_dir: &Path,
    resources: &BundledResources,
) -> Result<CheckstyleFiles> {
    let config_content = resources.get(CHECKSTYLE_CONFIG)?;
    let config = ProjectPath::GeneratedCheckstyleConfig.under(project_dir);
    io::write_atomic(&config, config_content)?;

    let project_suppressions = ProjectPath::ProjectCheckstyleSuppressions.under(root_dir);
    let (suppressions_content, suppressions_source) = if project_suppressions.is_file() {
        (
            io::read_bytes(&project_suppressions)?,
            SuppressionsSource::Project(project_suppressions),
        )
    } else {
        (
            resources.get(CHECKSTYLE_EMPTY_SUPPRESSIONS)?.to_vec(),
            SuppressionsSource::Bundled,
        )
    };
    let suppressions = ProjectPath::GeneratedCheckstyleSuppressions.under(project_dir);
    io::write_atomic(&suppressions, &suppressions_content)?;

    tracing::info!(
        config = %config.display(),
        suppressions = ?suppressions_source,
        "Wrote Checkstyle configuration"
    );

    Ok(CheckstyleFiles {
        config,
        suppressions,
        suppressions_source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::resources::BundledResource;
    use conventions_test_utils::project::TestProject;

    #[test]
    fn writes_bundled_config_and_empty_suppressions() {
        let project = TestProject::new("demo");
        let resources = BundledResources::builtin();

        let files = write_checkstyle_config(project.root(), project.root(), &resources).unwrap();

        assert_eq!(files.suppressions_source, SuppressionsSource::Bundled);
        assert_eq!(
            project.read("build/generated/checkstyle/checkstyle.xml"),
            resources.get(CHECKSTYLE_CONFIG).unwrap()
        );
        assert_eq!(
            project.read("build/generated/checkstyle/suppressions.xml"),
            resources.get(CHECKSTYLE_EMPTY_SUPPRESSIONS).unwrap()
        );
    }

    #[test]
    fn root_project_suppressions_take_precedence() {
        let root = TestProject::new("root");
        let custom = b"<suppressions><suppress checks=\"LineLength\" files=\".*\"/></suppressions>";
        root.write("config/checkstyle/suppressions.xml", custom);
        let module_dir = root.root().join("module-a");

        let files =
            write_checkstyle_config(&module_dir, root.root(), &BundledResources::builtin())
                .unwrap();

        assert!(matches!(files.suppressions_source, SuppressionsSource::Project(_)));
        assert_eq!(
            std::fs::read(module_dir.join("build/generated/checkstyle/suppressions.xml")).unwrap(),
            custom
        );
    }

    #[test]
    fn missing_bundled_config_is_fatal() {
        static ONLY_HOOK: &[BundledResource] = &[BundledResource {
            name: "git-hooks/pre-commit",
            content: b"#!/bin/sh\n",
        }];
        let project = TestProject::new("demo");

        let err = write_checkstyle_config(
            project.root(),
            project.root(),
            &BundledResources::from_entries(ONLY_HOOK),
        )
        .unwrap_err();

        assert!(matches!(err, Error::MissingBundledResource { .. }));
        project.assert_file_not_exists("build/generated/checkstyle/checkstyle.xml");
    }
}
