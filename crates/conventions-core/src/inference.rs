//! Inference helpers
//!
//! Derive setting values from project structure and metadata when no
//! explicit, environment or property value is supplied. Helpers return
//! `Ok(None)` when they have nothing to offer; errors mean the inputs are
//! contradictory and must not be silently skipped.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use conventions_fs::NormalizedPath;
use conventions_git::{parse_remote_url, parse_slug};
use regex::Regex;

use crate::context::{ResolutionContext, SourceFile};
use crate::setting::SettingId;
use crate::{Error, Result};

/// Environment variable GitHub Actions sets to `owner/repo`.
pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

const GITHUB_PAGES_GROUP_PREFIX: &str = "io.github.";

static JAVA_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Infer the base package from discovered sources.
///
/// Files directly under a source root belong to the default package and are
/// ignored. Among the remaining package directories the shallowest wins; ties
/// go to the lexicographically smallest path. Sources spread over more than
/// one top-level directory have no common base and are reported as
/// [`Error::AmbiguousBasePackage`].
pub fn infer_base_package(sources: &[SourceFile]) -> Result<Option<String>> {
    let packages: BTreeSet<NormalizedPath> = sources
        .iter()
        .filter_map(|source| source.path.parent())
        .filter(|dir| !dir.is_empty())
        .collect();

    let top_level: BTreeSet<&str> = packages
        .iter()
        .filter_map(|dir| dir.segments().next())
        .collect();
    if top_level.len() > 1 {
        return Err(Error::AmbiguousBasePackage {
            candidates: top_level.into_iter().map(str::to_string).collect(),
        });
    }

    let Some(min_depth) = packages.iter().map(NormalizedPath::depth).min() else {
        return Ok(None);
    };
    // BTreeSet iteration is ordered, so the first match is the smallest path.
    let Some(chosen) = packages.iter().find(|dir| dir.depth() == min_depth) else {
        return Ok(None);
    };

    let segments: Vec<&str> = chosen.segments().collect();
    if let Some(bad) = segments.iter().find(|s| !JAVA_IDENTIFIER.is_match(s)) {
        return Err(Error::InferenceFailure {
            name: SettingId::BasePackage.name().to_string(),
            reason: format!("directory '{chosen}' has segment '{bad}' which is not a Java identifier"),
        });
    }

    let package = segments.join(".");
    tracing::debug!(%package, from = %chosen, "Inferred base package");
    Ok(Some(package))
}

/// Infer the GitHub owner of the project.
///
/// Tries, in order: the `GITHUB_REPOSITORY` slug, the `origin` remote URL and
/// an `io.github.<owner>` group id. Returns `None` when none applies.
pub fn infer_github_owner(context: &ResolutionContext) -> Option<String> {
    if let Some(repo) = context.env(GITHUB_REPOSITORY_ENV).and_then(parse_slug) {
        return Some(repo.owner);
    }
    if let Some(repo) = context
        .project()
        .remote_url
        .as_deref()
        .and_then(parse_remote_url)
    {
        return Some(repo.owner);
    }
    context
        .project()
        .group
        .as_deref()
        .and_then(owner_from_group)
}

fn owner_from_group(group: &str) -> Option<String> {
    group
        .trim()
        .strip_prefix(GITHUB_PAGES_GROUP_PREFIX)
        .and_then(|rest| rest.split('.').next())
        .filter(|owner| !owner.is_empty())
        .map(str::to_string)
}

/// The project description, or its name when the description is blank.
pub fn project_description(context: &ResolutionContext) -> Option<String> {
    let project = context.project();
    project
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .or_else(|| project_name(context))
}

/// The project name, when non-blank.
pub fn project_name(context: &ResolutionContext) -> Option<String> {
    Some(context.project().name.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sources(paths: &[&str]) -> Vec<SourceFile> {
        paths
            .iter()
            .map(|p| SourceFile::new("src/main/java", *p))
            .collect()
    }

    #[test]
    fn single_source_yields_its_package() {
        let found = infer_base_package(&sources(&["com/example/app/Sample.java"])).unwrap();
        assert_eq!(found.as_deref(), Some("com.example.app"));
    }

    #[test]
    fn shallowest_package_wins() {
        let found = infer_base_package(&sources(&[
            "com/example/app/internal/Helper.java",
            "com/example/app/Main.java",
        ]))
        .unwrap();
        assert_eq!(found.as_deref(), Some("com.example.app"));
    }

    #[test]
    fn equally_shallow_candidates_pick_smallest_path() {
        let found = infer_base_package(&sources(&[
            "com/example/zeta/Z.java",
            "com/example/alpha/A.java",
        ]))
        .unwrap();
        assert_eq!(found.as_deref(), Some("com.example.alpha"));
    }

    #[test]
    fn unrelated_top_level_packages_are_ambiguous() {
        let err = infer_base_package(&sources(&["com/acme/A.java", "org/other/B.java"]))
            .unwrap_err();
        match err {
            Error::AmbiguousBasePackage { candidates } => {
                assert_eq!(candidates, vec!["com".to_string(), "org".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_package_sources_are_ignored() {
        let found =
            infer_base_package(&sources(&["Main.java", "com/acme/Util.java"])).unwrap();
        assert_eq!(found.as_deref(), Some("com.acme"));
        assert_eq!(infer_base_package(&sources(&["Main.java"])).unwrap(), None);
    }

    #[test]
    fn no_sources_infers_nothing() {
        assert_eq!(infer_base_package(&[]).unwrap(), None);
    }

    #[test]
    fn non_identifier_directories_fail_inference() {
        let err = infer_base_package(&sources(&["com/my-app/Main.java"])).unwrap_err();
        assert!(matches!(err, Error::InferenceFailure { ref name, .. } if name == "basePackage"));
    }

    #[test]
    fn inference_is_order_independent() {
        let forward = infer_base_package(&sources(&["com/b/B.java", "com/a/A.java"])).unwrap();
        let backward = infer_base_package(&sources(&["com/a/A.java", "com/b/B.java"])).unwrap();
        assert_eq!(forward, backward);
    }

    #[rstest]
    #[case(Some("acme/widgets"), None, None, Some("acme"))]
    #[case(None, Some("git@github.com:octo/widgets.git"), None, Some("octo"))]
    #[case(None, None, Some("io.github.acme.lib"), Some("acme"))]
    #[case(Some("slug/one"), Some("git@github.com:remote/two.git"), Some("io.github.group"), Some("slug"))]
    #[case(None, Some("https://gitlab.com/acme/w.git"), Some("io.github.group"), Some("group"))]
    #[case(None, None, Some("com.example"), None)]
    #[case(Some("malformed"), None, None, None)]
    #[case(None, None, None, None)]
    fn github_owner_sources(
        #[case] slug: Option<&str>,
        #[case] remote: Option<&str>,
        #[case] group: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let mut builder = ResolutionContext::builder("widgets");
        if let Some(slug) = slug {
            builder = builder.env(GITHUB_REPOSITORY_ENV, slug);
        }
        if let Some(remote) = remote {
            builder = builder.remote_url(remote);
        }
        if let Some(group) = group {
            builder = builder.group(group);
        }

        assert_eq!(infer_github_owner(&builder.build()).as_deref(), expected);
    }

    #[test]
    fn description_falls_back_to_name() {
        let named = ResolutionContext::builder("widgets").description("  ").build();
        assert_eq!(project_description(&named).as_deref(), Some("widgets"));

        let described = ResolutionContext::builder("widgets")
            .description("Widget library")
            .build();
        assert_eq!(
            project_description(&described).as_deref(),
            Some("Widget library")
        );
    }
}
