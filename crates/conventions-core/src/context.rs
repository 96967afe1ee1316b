//! Resolution inputs for one project
//!
//! A [`ResolutionContext`] is an immutable snapshot of everything resolution
//! may look at: environment variables, project properties, project metadata
//! and the discovered Java sources. Re-resolving after any input changes
//! means building a new context.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use conventions_fs::{Error as FsError, NormalizedPath, ProjectPath};

use crate::Result;
use crate::manifest::ProjectManifest;

const JAVA_EXTENSION: &str = "java";

/// Descriptive metadata of the project being configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub group: Option<String>,
    pub description: Option<String>,
    pub directory: Option<PathBuf>,
    /// URL of the `origin` remote, when the project is a git checkout
    pub remote_url: Option<String>,
}

/// A Java source file, relative to the source root it was found under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    pub root: NormalizedPath,
    pub path: NormalizedPath,
}

impl SourceFile {
    pub fn new(root: impl Into<NormalizedPath>, path: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }
}

/// Immutable snapshot of resolution inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    env: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    project: ProjectMetadata,
    sources: Vec<SourceFile>,
}

impl ResolutionContext {
    /// Start building a context for the project called `name`.
    pub fn builder(name: impl Into<String>) -> ResolutionContextBuilder {
        ResolutionContextBuilder {
            env: BTreeMap::new(),
            properties: BTreeMap::new(),
            project: ProjectMetadata {
                name: name.into(),
                ..ProjectMetadata::default()
            },
            sources: Vec::new(),
        }
    }

    /// Capture a context from a project directory on disk.
    ///
    /// Reads `conventions.toml` when present, walks the configured source
    /// roots (default `src/main/java`) for `.java` files and looks up the
    /// `origin` remote. `env` is taken as given so callers decide whether the
    /// process environment participates. `properties` are layered over the
    /// manifest's `[properties]`.
    pub fn capture<E, P>(project_dir: &Path, env: E, properties: P) -> Result<Self>
    where
        E: IntoIterator<Item = (String, String)>,
        P: IntoIterator<Item = (String, String)>,
    {
        let manifest = ProjectManifest::load_or_default(&ProjectPath::Manifest.under(project_dir))?;
        let section = &manifest.project;

        let name = section
            .name
            .clone()
            .or_else(|| {
                project_dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        let roots = section
            .source_roots
            .clone()
            .unwrap_or_else(|| vec![ProjectPath::MainJavaSources.as_str().to_string()]);
        let sources = discover_sources(project_dir, &roots)?;

        let remote_url = match conventions_git::origin_url(project_dir) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read origin remote, ignoring");
                None
            }
        };

        let mut builder = Self::builder(name)
            .directory(project_dir)
            .envs(env)
            .properties(manifest.properties())
            .properties(properties)
            .sources(sources);
        if let Some(group) = &section.group {
            builder = builder.group(group);
        }
        if let Some(description) = &section.description {
            builder = builder.description(description);
        }
        if let Some(url) = remote_url {
            builder = builder.remote_url(url);
        }

        let context = builder.build();
        tracing::debug!(
            project = %context.project.name,
            sources = context.sources.len(),
            properties = context.properties.len(),
            "Captured resolution context"
        );
        Ok(context)
    }

    pub fn env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn project(&self) -> &ProjectMetadata {
        &self.project
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }
}

/// Builder for [`ResolutionContext`]; consumed by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ResolutionContextBuilder {
    env: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    project: ProjectMetadata,
    sources: Vec<SourceFile>,
}

impl ResolutionContextBuilder {
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn envs<I: IntoIterator<Item = (String, String)>>(mut self, vars: I) -> Self {
        self.env.extend(vars);
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn properties<I: IntoIterator<Item = (String, String)>>(mut self, properties: I) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.project.group = Some(group.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.project.description = Some(description.into());
        self
    }

    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.project.directory = Some(directory.into());
        self
    }

    pub fn remote_url(mut self, url: impl Into<String>) -> Self {
        self.project.remote_url = Some(url.into());
        self
    }

    /// Add a source file given as a path relative to `root`.
    pub fn source(mut self, root: &str, relative: &str) -> Self {
        self.sources.push(SourceFile::new(root, relative));
        self
    }

    pub fn sources<I: IntoIterator<Item = SourceFile>>(mut self, sources: I) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn build(mut self) -> ResolutionContext {
        self.sources.sort();
        self.sources.dedup();
        ResolutionContext {
            env: self.env,
            properties: self.properties,
            project: self.project,
            sources: self.sources,
        }
    }
}

/// Collect `.java` files under each root (relative to `project_dir`).
///
/// Missing roots are skipped. Symlinked files are resolved to their target;
/// symlinked directories are not followed.
pub fn discover_sources(project_dir: &Path, roots: &[String]) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();
    for root in roots {
        let root_path = NormalizedPath::new(root);
        let native_root = project_dir.join(root_path.to_native());
        if !native_root.is_dir() {
            tracing::debug!(root = %root_path, "Source root does not exist, skipping");
            continue;
        }
        let mut stack = vec![native_root.clone()];
        while let Some(dir) = stack.pop() {
            let entries = fs::read_dir(&dir).map_err(|e| FsError::io(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| FsError::io(&dir, e))?;
                let path = entry.path();
                let file_type = entry.file_type().map_err(|e| FsError::io(&path, e))?;
                if file_type.is_dir() {
                    stack.push(path);
                } else if is_regular_file(&path, file_type)
                    && path.extension().is_some_and(|ext| ext == JAVA_EXTENSION)
                    && let Some(relative) = NormalizedPath::relative(&native_root, &path)
                {
                    sources.push(SourceFile {
                        root: root_path.clone(),
                        path: relative,
                    });
                }
            }
        }
    }
    sources.sort();
    Ok(sources)
}

fn is_regular_file(path: &Path, file_type: fs::FileType) -> bool {
    if !file_type.is_symlink() {
        return file_type.is_file();
    }
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Dangling symlink, skipping");
            false
        }
    }
}
