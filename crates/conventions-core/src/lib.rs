//! Convention resolution engine for Java projects
//!
//! Centralizes the conventions shared by Java builds (JDK selection, coverage
//! gate, repository and publishing toggles, static-analysis arguments,
//! formatter rules) behind one resolution engine:
//!
//! - **Property parsing**: strict boolean/integer/decimal parsing, blank means absent
//! - **Resolution**: override > environment > property > inference > default, per setting
//! - **Inference**: base package from source layout, GitHub owner from CI/remote/group
//! - **Convention sets**: immutable, fully resolved snapshots per project
//!
//! It also materializes the bundled resources a build consumes: the
//! Checkstyle configuration and the git pre-commit hook.
//!
//! # Architecture
//!
//! ```text
//!              conventions-cli (host stand-in)
//!                        |
//!                 conventions-core
//!                   /          \
//!        conventions-fs    conventions-git
//! ```
//!
//! # Example
//!
//! ```
//! use conventions_core::{ConventionDefaults, ConventionEngine, ConventionOverrides, ResolutionContext};
//!
//! let mut overrides = ConventionOverrides::new();
//! overrides.jdk_version(21).minimum_coverage("0.9");
//!
//! let engine = ConventionEngine::new(ConventionDefaults::default(), overrides);
//! let context = ResolutionContext::builder("widgets")
//!     .group("io.github.acme")
//!     .source("src/main/java", "com/acme/widgets/Widget.java")
//!     .build();
//!
//! let set = engine.build(&context).unwrap();
//! assert_eq!(set.bytecode_jdk_version(), 21);
//! assert_eq!(set.base_package(), "com.acme.widgets");
//! assert_eq!(set.publishing_github_owner(), "acme");
//! ```

pub mod checkstyle;
pub mod context;
pub mod defaults;
pub mod error;
pub mod hooks;
pub mod inference;
pub mod manifest;
pub mod overrides;
pub mod parser;
pub mod resolver;
pub mod resources;
pub mod set;
pub mod setting;

pub use checkstyle::{CheckstyleFiles, SuppressionsSource, write_checkstyle_config};
pub use context::{ProjectMetadata, ResolutionContext, ResolutionContextBuilder, SourceFile};
pub use defaults::{ConventionDefaults, FormatterStep, FormattingRules};
pub use error::{Error, Result};
pub use hooks::{HookInstall, HookSource, install_git_hooks};
pub use manifest::ProjectManifest;
pub use overrides::ConventionOverrides;
pub use parser::{Decimal, parse_boolean, parse_decimal, parse_integer};
pub use resolver::{ConventionResolver, ResolutionStage, Resolved};
pub use resources::BundledResources;
pub use set::{ConventionEngine, ConventionSet, GeneratedLayout, ProjectConventions};
pub use setting::{SETTINGS, Setting, SettingId, SettingKind, SettingValue, ValueSource};
