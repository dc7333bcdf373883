// file: src/installer/repo.rs
// version: 1.0.0
// guid: b8d3f1a5-0c6e-4729-8b4d-6f1a9e35c208

//! Vendor repository and signing key management
//!
//! Writes the sources.list.d definition and the dearmored keyring file that
//! let APT fetch the vendor package. Both registrations are idempotent so a
//! re-run after an interrupted install is safe.

use crate::config::AppSpec;
use crate::executor::StepRunner;
use crate::{InstallerError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Manages the repository definition file and keyring file for one vendor
pub struct RepoManager<'a> {
    spec: &'a AppSpec,
    runner: &'a StepRunner,
}

impl<'a> RepoManager<'a> {
    pub fn new(spec: &'a AppSpec, runner: &'a StepRunner) -> Self {
        Self { spec, runner }
    }

    /// Download the vendor signing key, dearmor it and install it into the
    /// keyring path. Overwrites any previous key, which keeps re-runs safe.
    pub async fn register_key(&self) -> Result<()> {
        if self.runner.is_dry_run() {
            info!(
                "DRY RUN: would install signing key from {} to {}",
                self.spec.key_url, self.spec.keyring_path
            );
            return Ok(());
        }

        let armored = reqwest::get(&self.spec.key_url)
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                InstallerError::network(format!(
                    "failed to download signing key from {}: {}",
                    self.spec.key_url, e
                ))
            })?
            .bytes()
            .await
            .map_err(|e| InstallerError::network(format!("failed to read signing key: {}", e)))?;

        let scratch = tempfile::tempdir()?;
        let armored_path = scratch.path().join("vendor.asc");
        let dearmored_path = scratch.path().join("vendor.gpg");
        tokio::fs::write(&armored_path, &armored).await?;

        self.runner
            .run_capture(
                "import signing key",
                "gpg",
                &[
                    "--dearmor",
                    "--yes",
                    "-o",
                    &dearmored_path.to_string_lossy(),
                    &armored_path.to_string_lossy(),
                ],
            )
            .await?;

        self.runner
            .run(
                "install signing key",
                "install",
                &[
                    "-D",
                    "-m",
                    "644",
                    &dearmored_path.to_string_lossy(),
                    &self.spec.keyring_path,
                ],
                &[],
            )
            .await?;

        info!("Signing key installed to {}", self.spec.keyring_path);
        Ok(())
    }

    /// Write the repository definition, skipping the write when the file
    /// already carries the exact line. Repeated installs never duplicate the
    /// repository entry.
    pub async fn register_repo(&self) -> Result<()> {
        if self.repo_registered() {
            info!("Repository already registered at {}", self.spec.repo_path);
            return Ok(());
        }

        if self.runner.is_dry_run() {
            info!("DRY RUN: would write {}", self.spec.repo_path);
            return Ok(());
        }

        if let Some(parent) = Path::new(&self.spec.repo_path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.spec.repo_path, format!("{}\n", self.spec.repo_line)).await?;

        info!("Repository registered at {}", self.spec.repo_path);
        Ok(())
    }

    /// Remove the repository definition file, tolerating absence
    pub async fn remove_repo(&self) -> Result<()> {
        self.remove_file(&self.spec.repo_path).await
    }

    /// Remove the keyring file, tolerating absence
    pub async fn remove_key(&self) -> Result<()> {
        self.remove_file(&self.spec.keyring_path).await
    }

    /// Whether the repository definition file carries the expected line
    pub fn repo_registered(&self) -> bool {
        match std::fs::read_to_string(&self.spec.repo_path) {
            Ok(content) => content.trim() == self.spec.repo_line,
            Err(_) => false,
        }
    }

    /// Whether the keyring file exists
    pub fn key_registered(&self) -> bool {
        Path::new(&self.spec.keyring_path).exists()
    }

    async fn remove_file(&self, path: &str) -> Result<()> {
        if self.runner.is_dry_run() {
            info!("DRY RUN: would remove {}", path);
            return Ok(());
        }

        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                info!("Removed {}", path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} already absent", path);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_spec(dir: &TempDir) -> AppSpec {
        let mut spec = AppSpec::vscode();
        spec.repo_path = dir
            .path()
            .join("sources.list.d/vscode.list")
            .to_string_lossy()
            .to_string();
        spec.keyring_path = dir
            .path()
            .join("keyrings/packages.microsoft.gpg")
            .to_string_lossy()
            .to_string();
        spec
    }

    #[tokio::test]
    async fn test_register_repo_writes_single_line() {
        let dir = TempDir::new().unwrap();
        let spec = temp_spec(&dir);
        let runner = StepRunner::new(false);
        let repo = RepoManager::new(&spec, &runner);

        repo.register_repo().await.unwrap();
        let content = std::fs::read_to_string(&spec.repo_path).unwrap();
        assert_eq!(content, format!("{}\n", spec.repo_line));
    }

    #[tokio::test]
    async fn test_register_repo_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let spec = temp_spec(&dir);
        let runner = StepRunner::new(false);
        let repo = RepoManager::new(&spec, &runner);

        repo.register_repo().await.unwrap();
        repo.register_repo().await.unwrap();

        let content = std::fs::read_to_string(&spec.repo_path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_register_repo_replaces_stale_line() {
        let dir = TempDir::new().unwrap();
        let spec = temp_spec(&dir);
        std::fs::create_dir_all(Path::new(&spec.repo_path).parent().unwrap()).unwrap();
        std::fs::write(&spec.repo_path, "deb https://old.example.com stable main\n").unwrap();

        let runner = StepRunner::new(false);
        let repo = RepoManager::new(&spec, &runner);
        assert!(!repo.repo_registered());

        repo.register_repo().await.unwrap();
        assert!(repo.repo_registered());
    }

    #[tokio::test]
    async fn test_remove_repo_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let spec = temp_spec(&dir);
        let runner = StepRunner::new(false);
        let repo = RepoManager::new(&spec, &runner);

        assert!(repo.remove_repo().await.is_ok());
        assert!(repo.remove_key().await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_repo_deletes_file() {
        let dir = TempDir::new().unwrap();
        let spec = temp_spec(&dir);
        let runner = StepRunner::new(false);
        let repo = RepoManager::new(&spec, &runner);

        repo.register_repo().await.unwrap();
        assert!(repo.repo_registered());

        repo.remove_repo().await.unwrap();
        assert!(!repo.repo_registered());
        assert!(!Path::new(&spec.repo_path).exists());
    }

    #[tokio::test]
    async fn test_dry_run_register_repo_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let spec = temp_spec(&dir);
        let runner = StepRunner::new(true);
        let repo = RepoManager::new(&spec, &runner);

        repo.register_repo().await.unwrap();
        assert!(!Path::new(&spec.repo_path).exists());
    }

    #[tokio::test]
    async fn test_dry_run_remove_keeps_file() {
        let dir = TempDir::new().unwrap();
        let spec = temp_spec(&dir);

        let write_runner = StepRunner::new(false);
        RepoManager::new(&spec, &write_runner)
            .register_repo()
            .await
            .unwrap();

        let dry_runner = StepRunner::new(true);
        RepoManager::new(&spec, &dry_runner)
            .remove_repo()
            .await
            .unwrap();
        assert!(Path::new(&spec.repo_path).exists());
    }
}
