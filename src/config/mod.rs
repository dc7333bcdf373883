// file: src/config/mod.rs
// version: 1.0.0
// guid: b2e6c8d1-4f7a-49b3-8a5e-0c3d9f62e714

//! Configuration module for the VS Code install agent
//!
//! Defines the application spec (package, binary, repository and key locations)
//! and loading of YAML overrides.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

/// Everything the agent needs to know about the application it manages.
///
/// The built-in default describes Visual Studio Code from the Microsoft APT
/// repository; a YAML override file can substitute another vendor package
/// that follows the same repository/keyring layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSpec {
    /// Human-readable application name
    pub name: String,

    /// APT package name
    pub package: String,

    /// Binary expected on PATH after installation
    pub binary: String,

    /// Full sources.list line for the vendor repository
    pub repo_line: String,

    /// Path of the repository definition file under sources.list.d
    pub repo_path: String,

    /// URL of the armored vendor signing key
    pub key_url: String,

    /// Path of the dearmored keyring file
    pub keyring_path: String,

    /// Packages installed before the repository is registered
    pub prerequisites: Vec<String>,
}

impl AppSpec {
    /// The built-in Visual Studio Code spec
    pub fn vscode() -> Self {
        Self {
            name: "Visual Studio Code".to_string(),
            package: "code".to_string(),
            binary: "code".to_string(),
            repo_line: concat!(
                "deb [arch=amd64 signed-by=/etc/apt/keyrings/packages.microsoft.gpg] ",
                "https://packages.microsoft.com/repos/vscode stable main"
            )
            .to_string(),
            repo_path: "/etc/apt/sources.list.d/vscode.list".to_string(),
            key_url: "https://packages.microsoft.com/keys/microsoft.asc".to_string(),
            keyring_path: "/etc/apt/keyrings/packages.microsoft.gpg".to_string(),
            prerequisites: vec![
                "software-properties-common".to_string(),
                "apt-transport-https".to_string(),
                "wget".to_string(),
                "gpg".to_string(),
            ],
        }
    }

    /// Validate the spec before it drives privileged commands
    pub fn validate(&self) -> crate::Result<()> {
        if self.package.trim().is_empty() {
            return Err(crate::InstallerError::config("package name must not be empty"));
        }
        if self.binary.trim().is_empty() {
            return Err(crate::InstallerError::config("binary name must not be empty"));
        }
        if !self.repo_line.starts_with("deb ") {
            return Err(crate::InstallerError::config(format!(
                "repository line must start with 'deb ': {}",
                self.repo_line
            )));
        }
        if !self.repo_path.starts_with('/') || !self.keyring_path.starts_with('/') {
            return Err(crate::InstallerError::config(
                "repository and keyring paths must be absolute",
            ));
        }
        if !self.key_url.starts_with("https://") {
            return Err(crate::InstallerError::config(format!(
                "signing key must be fetched over https: {}",
                self.key_url
            )));
        }
        Ok(())
    }
}

impl Default for AppSpec {
    fn default() -> Self {
        Self::vscode()
    }
}
