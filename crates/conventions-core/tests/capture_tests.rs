//! Capturing contexts from project directories on disk.

use std::iter;
use std::sync::Arc;

use conventions_core::{
    ConventionEngine, Error, ProjectConventions, ResolutionContext, SettingId, ValueSource,
};
use conventions_test_utils::git::git_repo_with_origin;
use conventions_test_utils::project::TestProject;
use pretty_assertions::assert_eq;

fn no_vars() -> iter::Empty<(String, String)> {
    iter::empty()
}

#[test]
fn directory_name_and_sources_drive_inference() {
    let project = TestProject::new("sample-lib");
    project.write_source("com/example/app/Sample.java");
    project.write_source("com/example/app/internal/Helper.java");

    let context = ResolutionContext::capture(project.root(), no_vars(), no_vars()).unwrap();
    let set = ConventionEngine::default().build(&context).unwrap();

    assert_eq!(context.project().name, "sample-lib");
    assert_eq!(set.base_package(), "com.example.app");
    assert_eq!(set.publishing_github_repository(), "sample-lib");
    assert_eq!(set.publishing_pom_description(), "sample-lib");
}

#[test]
fn manifest_supplies_metadata_and_properties() {
    let project = TestProject::new("checkout");
    project.write_manifest(
        r#"
[project]
group = "io.github.acme"
name = "widgets"
description = "Widget library"
source-roots = ["lib/java"]

[properties]
"conventions.coverage.minimum" = "0.9"
"conventions.publishing.enabled" = false
"#,
    );
    project.write("lib/java/com/acme/widgets/Widget.java", "package com.acme.widgets;\n");

    let context = ResolutionContext::capture(project.root(), no_vars(), no_vars()).unwrap();
    let set = ConventionEngine::default().build(&context).unwrap();

    assert_eq!(set.publishing_pom_name(), "widgets");
    assert_eq!(set.publishing_pom_description(), "Widget library");
    assert_eq!(set.publishing_github_owner(), "acme");
    assert_eq!(set.base_package(), "com.acme.widgets");
    assert_eq!(set.minimum_coverage().as_str(), "0.9");
    assert!(!set.publishing_enabled());
    assert_eq!(set.source(SettingId::PublishingEnabled), ValueSource::Property);
}

#[test]
fn caller_properties_layer_over_manifest() {
    let project = TestProject::new("layered");
    project.write_manifest("[properties]\n\"conventions.coverage.minimum\" = \"0.9\"\n");
    project.write_source("com/example/Main.java");

    let context = ResolutionContext::capture(
        project.root(),
        no_vars(),
        [("conventions.coverage.minimum".to_string(), "0.5".to_string())],
    )
    .unwrap();

    assert_eq!(context.property("conventions.coverage.minimum"), Some("0.5"));
}

#[test]
fn malformed_manifest_is_reported() {
    let project = TestProject::new("broken");
    project.write_manifest("[project\nname = ");

    let err = ResolutionContext::capture(project.root(), no_vars(), no_vars()).unwrap_err();

    assert!(matches!(err, Error::ManifestParse { .. }));
}

#[test]
fn github_owner_is_inferred_from_origin_remote() {
    let project = TestProject::new("remote");
    project.write_source("com/example/Main.java");
    git_repo_with_origin(project.root(), "git@github.com:octo-org/remote.git");

    let context = ResolutionContext::capture(project.root(), no_vars(), no_vars()).unwrap();
    let set = ConventionEngine::default().build(&context).unwrap();

    assert_eq!(set.publishing_github_owner(), "octo-org");
    assert_eq!(set.source(SettingId::PublishingGithubOwner), ValueSource::Inference);
}

#[test]
fn repository_slug_env_wins_over_remote() {
    let project = TestProject::new("remote");
    project.write_source("com/example/Main.java");
    git_repo_with_origin(project.root(), "https://github.com/octo-org/remote.git");

    let context = ResolutionContext::capture(
        project.root(),
        [("GITHUB_REPOSITORY".to_string(), "ci-org/remote".to_string())],
        no_vars(),
    )
    .unwrap();
    let set = ConventionEngine::default().build(&context).unwrap();

    assert_eq!(set.publishing_github_owner(), "ci-org");
}

#[test]
fn project_conventions_build_once_and_report_failures() {
    let engine = Arc::new(ConventionEngine::default());

    let ok = ProjectConventions::new(
        Arc::clone(&engine),
        ResolutionContext::builder("ok")
            .source("src/main/java", "com/example/Main.java")
            .build(),
    );
    assert!(std::ptr::eq(ok.get().unwrap(), ok.get().unwrap()));

    let failing = ProjectConventions::new(engine, ResolutionContext::builder("empty").build());
    assert!(matches!(failing.get(), Err(Error::MissingRequiredSetting { .. })));
    assert!(matches!(failing.get(), Err(Error::MissingRequiredSetting { .. })));
}
