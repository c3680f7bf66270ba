//! Optional TOML settings file.
//!
//! ```toml
//! configuration = "Debug"
//! group_id = "MyComponents"
//! directory_id = "INSTALLFOLDER"
//!
//! [variables]
//! Platform = "x64"
//! ```
//!
//! Every key is optional; command line flags take precedence.

use std::path::Path;

use serde::Deserialize;

use crate::errors::GenerateError;
use crate::fs_op::stat;
use crate::template::Variables;

/// File picked up from the working directory when `--settings` is not given.
pub const SETTINGS_FILE: &str = "wixgen.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub configuration: Option<String>,
    pub group_id: Option<String>,
    pub directory_id: Option<String>,
    pub variables: Variables,
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse the settings file at `path`.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GenerateError::Settings(format!("cannot read {}: {}", path.display(), e))
        })?;
        let settings = Self::from_toml(&text).map_err(|e| {
            GenerateError::Settings(format!("cannot parse {}: {}", path.display(), e))
        })?;
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `explicit` when given, otherwise `wixgen.toml` in `cwd` if it
    /// exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, GenerateError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = cwd.join(SETTINGS_FILE);
        if stat::is_file(&candidate) {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_all_keys() {
        let s = Settings::from_toml(
            r#"
configuration = "Debug"
group_id = "AppFiles"
directory_id = "BINFOLDER"

[variables]
Platform = "x64"
"#,
        )
        .unwrap();
        assert_eq!(s.configuration.as_deref(), Some("Debug"));
        assert_eq!(s.group_id.as_deref(), Some("AppFiles"));
        assert_eq!(s.directory_id.as_deref(), Some("BINFOLDER"));
        assert_eq!(s.variables.get("Platform").map(String::as_str), Some("x64"));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_toml("group = \"x\"").is_err());
    }

    #[test]
    fn discover_prefers_explicit_then_working_directory() {
        let cwd = tempdir().unwrap();
        assert_eq!(Settings::discover(None, cwd.path()).unwrap(), Settings::default());

        fs::write(cwd.path().join(SETTINGS_FILE), "configuration = \"Debug\"").unwrap();
        let found = Settings::discover(None, cwd.path()).unwrap();
        assert_eq!(found.configuration.as_deref(), Some("Debug"));

        let other = cwd.path().join("ci.toml");
        fs::write(&other, "group_id = \"CiFiles\"").unwrap();
        let explicit = Settings::discover(Some(&other), cwd.path()).unwrap();
        assert_eq!(explicit.group_id.as_deref(), Some("CiFiles"));
        assert_eq!(explicit.configuration, None);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let cwd = tempdir().unwrap();
        let err = Settings::discover(Some(&cwd.path().join("nope.toml")), cwd.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Settings(_)));
    }
}
