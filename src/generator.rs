//! The component generator: resolve the directory template, list its files
//! and render the fragment.

use std::io::Write;
use std::path::PathBuf;

use crate::errors::GenerateError;
use crate::fs_op::{self, FsOpError};
use crate::render::{self, ComponentGroup};
use crate::settings::Settings;
use crate::template::{PathTemplate, Variables, CONFIGURATION_VAR};

pub const DEFAULT_CONFIGURATION: &str = "Release";

/// Everything a generation run needs. Built by the CLI from its arguments and
/// the settings file, or directly by library callers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory template, e.g. `..\App\bin\$(Configuration)\net8.0-windows`.
    pub dir: String,
    /// Value bound to `$(Configuration)`.
    pub configuration: String,
    /// Additional template variables.
    pub variables: Variables,
    pub group: ComponentGroup,
    /// Write here instead of standard output.
    pub output: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            configuration: DEFAULT_CONFIGURATION.to_owned(),
            variables: Variables::new(),
            group: ComponentGroup::default(),
            output: None,
        }
    }

    /// Start from `settings`, falling back to the built-in defaults for
    /// anything the file leaves out. Callers apply explicit overrides after.
    pub fn from_settings(dir: impl Into<String>, settings: &Settings) -> Self {
        let mut config = Self::new(dir);
        if let Some(c) = &settings.configuration {
            config.configuration = c.clone();
        }
        if let Some(id) = &settings.group_id {
            config.group.id = id.clone();
        }
        if let Some(directory) = &settings.directory_id {
            config.group.directory = directory.clone();
        }
        config.variables = settings.variables.clone();
        config
    }

    /// All variable bindings; `Configuration` always maps to
    /// [`GeneratorConfig::configuration`].
    pub fn bindings(&self) -> Variables {
        let mut vars = self.variables.clone();
        vars.insert(CONFIGURATION_VAR.to_owned(), self.configuration.clone());
        vars
    }

    /// The directory that will be listed.
    pub fn resolved_dir(&self) -> PathBuf {
        for name in self.unbound_variables() {
            tracing::warn!("template variable $({}) has no binding, kept as written", name);
        }
        PathBuf::from(PathTemplate::parse(self.dir.as_str()).resolve(&self.bindings()))
    }

    /// Variables referenced by `dir` that have no binding, without
    /// duplicates, in order of first appearance.
    pub fn unbound_variables(&self) -> Vec<String> {
        let bindings = self.bindings();
        let mut unbound: Vec<String> = Vec::new();
        for name in PathTemplate::parse(self.dir.as_str()).variables() {
            if !bindings.contains_key(name) && !unbound.iter().any(|n| n == name) {
                unbound.push(name.to_owned());
            }
        }
        unbound
    }
}

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub components: usize,
    pub written_to: Option<PathBuf>,
}

/// List the resolved directory and render the fragment.
///
/// The `Source` attributes use `config.dir` as typed, placeholders included;
/// only the listing uses the resolved path.
pub fn generate(config: &GeneratorConfig) -> Result<String, GenerateError> {
    generate_counted(config).map(|(xml, _)| xml)
}

fn generate_counted(config: &GeneratorConfig) -> Result<(String, usize), GenerateError> {
    let dir = config.resolved_dir();
    tracing::debug!("resolved {} to {}", config.dir, dir.display());

    let files = fs_op::list_files(&dir)?;
    if files.is_empty() {
        tracing::warn!("no regular files in {}", dir.display());
        return Err(GenerateError::EmptyDirectory(dir));
    }

    let xml = render::render_group(&config.group, &config.dir, &files)?;
    tracing::info!("rendered {} components from {}", files.len(), dir.display());
    Ok((xml, files.len()))
}

/// Generate and deliver the fragment: to `config.output` when set, otherwise
/// to `stdout` followed by a newline. After a file write a one-line summary
/// is printed to `stdout` instead.
pub fn run<W: Write>(config: &GeneratorConfig, stdout: &mut W) -> Result<Report, GenerateError> {
    let (xml, components) = generate_counted(config)?;

    let stdout_err = |e: std::io::Error| GenerateError::Write {
        path: PathBuf::from("<stdout>"),
        source: FsOpError::io("<stdout>", e),
    };

    match &config.output {
        Some(path) => {
            fs_op::atomic_write(path, xml.as_bytes()).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            writeln!(stdout, "Wrote {} components to {}", components, path.display())
                .map_err(stdout_err)?;
            Ok(Report {
                components,
                written_to: Some(path.clone()),
            })
        }
        None => {
            writeln!(stdout, "{}", xml).map_err(stdout_err)?;
            Ok(Report {
                components,
                written_to: None,
            })
        }
    }
}
