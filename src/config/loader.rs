// file: src/config/loader.rs
// version: 1.0.0
// guid: c9a3e5f1-2d6b-47c8-b1e4-5a8f0d72c396

//! Application spec loading from YAML override files

use super::AppSpec;
use crate::Result;
use std::fs;
use std::path::Path;

/// Loader for application spec override files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self
    }

    /// Load an application spec from a YAML file
    pub fn load_app_spec<P: AsRef<Path>>(&self, path: P) -> Result<AppSpec> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::InstallerError::config(format!(
                "Failed to read spec file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let spec: AppSpec = serde_yaml::from_str(&content)?;
        spec.validate()?;

        Ok(spec)
    }

    /// Resolve the spec to use: an override file when given, the built-in
    /// VS Code spec otherwise
    pub fn resolve(&self, override_path: Option<&str>) -> Result<AppSpec> {
        match override_path {
            Some(path) => self.load_app_spec(path),
            None => Ok(AppSpec::vscode()),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
