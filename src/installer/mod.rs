// file: src/installer/mod.rs
// version: 1.0.0
// guid: c6f4a2d8-1e97-4b35-a0c8-4d9b7e62f013

//! Install/uninstall orchestration
//!
//! Runs the external-command steps in a fixed order and halts on the first
//! failure. No step has rollback semantics beyond what APT itself guarantees,
//! so a failed run leaves the system in the state of the last successful step.

pub mod apt;
pub mod repo;

use crate::config::AppSpec;
use crate::executor::StepRunner;
use crate::utils::SystemUtils;
use crate::{InstallerError, Result};
use apt::AptManager;
use repo::RepoManager;
use serde::Serialize;
use std::future::Future;
use tracing::info;

/// Installer/uninstaller for one vendor application
pub struct Installer {
    spec: AppSpec,
    runner: StepRunner,
}

/// Snapshot of the installation state, derived on demand and never cached
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub name: String,
    pub package: String,
    pub binary: String,
    pub installed: bool,
    pub binary_path: Option<String>,
    pub package_installed: bool,
    pub repo_registered: bool,
    pub key_registered: bool,
}

impl Installer {
    /// Create an installer for the given application spec
    pub fn new(spec: AppSpec, dry_run: bool) -> Self {
        Self {
            spec,
            runner: StepRunner::new(dry_run),
        }
    }

    /// The application spec this installer operates on
    pub fn spec(&self) -> &AppSpec {
        &self.spec
    }

    /// Whether the application is present, judged by the binary on PATH or
    /// the dpkg record
    pub async fn check_installed(&self) -> bool {
        if SystemUtils::binary_path(&self.spec.binary).is_some() {
            return true;
        }
        let apt = AptManager::new(&self.runner);
        apt.is_package_installed(&self.spec.package).await
    }

    /// Run the install sequence.
    ///
    /// Fails fast with [`InstallerError::AlreadyInstalled`] before any
    /// mutating command when the application is already present.
    pub async fn install(&self) -> Result<()> {
        if self.check_installed().await {
            return Err(InstallerError::AlreadyInstalled(self.spec.name.clone()));
        }

        let apt = AptManager::new(&self.runner);
        let repo = RepoManager::new(&self.spec, &self.runner);

        self.step("Updating package index", apt.update()).await?;
        self.step(
            "Installing prerequisites",
            apt.install(&self.spec.prerequisites),
        )
        .await?;
        self.step("Registering signing key", repo.register_key())
            .await?;
        self.step("Registering vendor repository", repo.register_repo())
            .await?;
        self.step("Refreshing package index", apt.update()).await?;
        self.step(
            &format!("Installing {}", self.spec.package),
            apt.install(std::slice::from_ref(&self.spec.package)),
        )
        .await?;
        self.step("Verifying installation", self.verify_installed())
            .await?;

        Ok(())
    }

    /// Run the uninstall sequence.
    ///
    /// Fails fast with [`InstallerError::NotInstalled`] before any mutating
    /// command when the application is absent. `purge` also removes the
    /// repository definition and keyring.
    pub async fn uninstall(&self, purge: bool) -> Result<()> {
        if !self.check_installed().await {
            return Err(InstallerError::NotInstalled(self.spec.name.clone()));
        }

        let apt = AptManager::new(&self.runner);
        let repo = RepoManager::new(&self.spec, &self.runner);

        self.step(
            &format!("Removing {}", self.spec.package),
            apt.remove_purge(&self.spec.package),
        )
        .await?;

        if purge {
            self.step("Removing vendor repository", repo.remove_repo())
                .await?;
            self.step("Removing signing key", repo.remove_key())
                .await?;
        }

        self.step("Cleaning up unused dependencies", apt.autoremove())
            .await?;
        self.step("Verifying removal", self.verify_absent())
            .await?;

        Ok(())
    }

    /// Collect the current installation status without mutating anything
    pub async fn status(&self) -> Status {
        let apt = AptManager::new(&self.runner);
        let repo = RepoManager::new(&self.spec, &self.runner);

        let binary_path =
            SystemUtils::binary_path(&self.spec.binary).map(|p| p.display().to_string());
        let package_installed = apt.is_package_installed(&self.spec.package).await;

        Status {
            name: self.spec.name.clone(),
            package: self.spec.package.clone(),
            binary: self.spec.binary.clone(),
            installed: binary_path.is_some() || package_installed,
            binary_path,
            package_installed,
            repo_registered: repo.repo_registered(),
            key_registered: repo.key_registered(),
        }
    }

    /// Log a step, run it, and log the success marker. One line per step.
    async fn step<F>(&self, name: &str, fut: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        info!("► {}", name);
        fut.await?;
        info!(step = name, "ok");
        Ok(())
    }

    async fn verify_installed(&self) -> Result<()> {
        if self.runner.is_dry_run() {
            return Ok(());
        }
        if SystemUtils::binary_path(&self.spec.binary).is_none() {
            return Err(InstallerError::step(
                "Verifying installation",
                format!("binary '{}' not found on PATH after install", self.spec.binary),
            ));
        }
        Ok(())
    }

    async fn verify_absent(&self) -> Result<()> {
        if self.runner.is_dry_run() {
            return Ok(());
        }
        if SystemUtils::binary_path(&self.spec.binary).is_some() {
            return Err(InstallerError::step(
                "Verifying removal",
                format!("binary '{}' still on PATH after removal", self.spec.binary),
            ));
        }
        Ok(())
    }
}
