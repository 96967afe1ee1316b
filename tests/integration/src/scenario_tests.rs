//! Cross-crate scenarios
//!
//! Each test drives a project on disk through capture, resolution and
//! resource materialization the way a host build would.

use std::iter;
use std::path::Path;
use std::sync::Arc;

use conventions_core::{
    BundledResources, ConventionDefaults, ConventionEngine, ConventionOverrides, HookInstall,
    HookSource, ProjectConventions, ResolutionContext, SuppressionsSource, install_git_hooks,
    write_checkstyle_config,
};
use conventions_test_utils::git::{git_repo_with_commit, git_repo_with_origin};
use conventions_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn no_vars() -> iter::Empty<(String, String)> {
    iter::empty()
}

fn capture(dir: &Path) -> ResolutionContext {
    ResolutionContext::capture(dir, no_vars(), no_vars()).unwrap()
}

// ============================================================================
// Multi-project builds
// ============================================================================

#[test]
fn modules_share_one_engine_and_root_suppressions() {
    let root = TestProject::new("platform");
    root.write("config/checkstyle/suppressions.xml", "<suppressions>root</suppressions>");
    root.write(
        "api/src/main/java/com/acme/api/Api.java",
        "package com.acme.api;\n",
    );
    root.write(
        "core/src/main/java/com/acme/core/Core.java",
        "package com.acme.core;\n",
    );

    let mut overrides = ConventionOverrides::new();
    overrides.jdk_version(21);
    let engine = Arc::new(ConventionEngine::new(ConventionDefaults::default(), overrides));

    let api = ProjectConventions::new(Arc::clone(&engine), capture(&root.root().join("api")));
    let core = ProjectConventions::new(Arc::clone(&engine), capture(&root.root().join("core")));

    assert_eq!(api.get().unwrap().base_package(), "com.acme.api");
    assert_eq!(core.get().unwrap().base_package(), "com.acme.core");
    assert_eq!(api.get().unwrap().compiler_jdk_version(), 21);
    assert_eq!(core.get().unwrap().publishing_github_repository(), "core");

    let resources = BundledResources::builtin();
    for module in ["api", "core"] {
        let files =
            write_checkstyle_config(&root.root().join(module), root.root(), &resources).unwrap();
        assert!(matches!(files.suppressions_source, SuppressionsSource::Project(_)));
        assert_eq!(
            root.read(&format!("{module}/build/generated/checkstyle/suppressions.xml")),
            b"<suppressions>root</suppressions>"
        );
    }
}

#[test]
fn module_manifest_does_not_leak_into_siblings() {
    let root = TestProject::new("platform");
    root.write(
        "api/conventions.toml",
        "[properties]\n\"conventions.publishing.enabled\" = false\n",
    );
    root.write("api/src/main/java/com/acme/api/Api.java", "");
    root.write("web/src/main/java/com/acme/web/Web.java", "");
    let engine = ConventionEngine::default();

    let api = engine.build(&capture(&root.root().join("api"))).unwrap();
    let web = engine.build(&capture(&root.root().join("web"))).unwrap();

    assert!(!api.publishing_enabled());
    assert!(web.publishing_enabled());
}

// ============================================================================
// Git layouts
// ============================================================================

#[test]
fn hooks_install_into_common_dir_from_worktree() {
    let temp = TempDir::new().unwrap();
    let main = temp.path().join("main");
    std::fs::create_dir_all(&main).unwrap();
    let repo = git_repo_with_commit(&main);
    let worktree_path = temp.path().join("feature");
    repo.worktree("feature", &worktree_path, None).unwrap();

    let outcome = install_git_hooks(&worktree_path, &BundledResources::builtin()).unwrap();

    assert!(matches!(
        outcome,
        HookInstall::Installed { source: HookSource::Bundled(_), .. }
    ));
    let installed = std::fs::read(main.join(".git/hooks/pre-commit")).unwrap();
    let staged = std::fs::read(worktree_path.join("build/generated/git-hooks/pre-commit")).unwrap();
    assert_eq!(installed, staged);
}

#[test]
fn configured_hooks_path_is_honored_for_worktrees() {
    let temp = TempDir::new().unwrap();
    let main = temp.path().join("main");
    std::fs::create_dir_all(&main).unwrap();
    let repo = git_repo_with_commit(&main);
    repo.config()
        .unwrap()
        .set_str("core.hooksPath", ".githooks")
        .unwrap();
    let worktree_path = temp.path().join("feature");
    repo.worktree("feature", &worktree_path, None).unwrap();
    std::fs::create_dir_all(worktree_path.join("scripts/git-hooks")).unwrap();
    std::fs::write(worktree_path.join("scripts/git-hooks/pre-commit"), "custom").unwrap();

    install_git_hooks(&worktree_path, &BundledResources::builtin()).unwrap();

    assert_eq!(
        std::fs::read(worktree_path.join(".githooks/pre-commit")).unwrap(),
        b"custom"
    );
}

#[cfg(unix)]
#[test]
fn installed_hook_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let project = TestProject::new("exec");
    project.init_git();

    install_git_hooks(project.root(), &BundledResources::builtin()).unwrap();

    let mode = std::fs::metadata(project.root().join(".git/hooks/pre-commit"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

// ============================================================================
// Remote inference end to end
// ============================================================================

#[test]
fn owner_from_remote_feeds_serialized_set() {
    let project = TestProject::new("widgets");
    project.write_source("io/github/octo/widgets/Widget.java");
    git_repo_with_origin(
        project.root(),
        "https://github.com/octo/widgets.git",
    );

    let set = ConventionEngine::default()
        .build(&capture(project.root()))
        .unwrap();
    let json = serde_json::to_value(&set).unwrap();

    assert_eq!(json["settings"]["publishingGithubOwner"]["value"], "octo");
    assert_eq!(json["settings"]["publishingGithubOwner"]["source"], "inference");
    assert_eq!(json["settings"]["basePackage"]["value"], "io.github.octo.widgets");
    assert_eq!(
        json["layout"]["preCommitHook"],
        "build/generated/git-hooks/pre-commit"
    );
}
