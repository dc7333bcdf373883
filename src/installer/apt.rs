// file: src/installer/apt.rs
// version: 1.0.0
// guid: a7e2c4b9-8d13-4f60-95ab-2c7e1d503f86

//! APT invocations
//!
//! Thin wrapper over apt-get and dpkg-query. Dependency resolution, download
//! and signature verification all stay inside APT.

use crate::executor::StepRunner;
use crate::Result;
use tracing::debug;

const NONINTERACTIVE: (&str, &str) = ("DEBIAN_FRONTEND", "noninteractive");

/// Package manager operations used by the install/uninstall paths
pub struct AptManager<'a> {
    runner: &'a StepRunner,
}

impl<'a> AptManager<'a> {
    pub fn new(runner: &'a StepRunner) -> Self {
        Self { runner }
    }

    /// Refresh the package index
    pub async fn update(&self) -> Result<()> {
        self.runner
            .run("apt update", "apt-get", &["update"], &[NONINTERACTIVE])
            .await
    }

    /// Install packages
    pub async fn install(&self, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let mut args = vec!["install", "-y"];
        args.extend(packages.iter().map(|p| p.as_str()));

        self.runner
            .run("apt install", "apt-get", &args, &[NONINTERACTIVE])
            .await
    }

    /// Remove a package together with its configuration
    pub async fn remove_purge(&self, package: &str) -> Result<()> {
        self.runner
            .run(
                "apt remove",
                "apt-get",
                &["remove", "--purge", "-y", package],
                &[NONINTERACTIVE],
            )
            .await
    }

    /// Remove packages that were installed as dependencies and are no longer needed
    pub async fn autoremove(&self) -> Result<()> {
        self.runner
            .run(
                "apt autoremove",
                "apt-get",
                &["autoremove", "-y"],
                &[NONINTERACTIVE],
            )
            .await
    }

    /// Check whether a package is recorded as installed in the dpkg database.
    ///
    /// dpkg-query exits non-zero for unknown packages; that and a missing
    /// dpkg-query both count as "not installed".
    pub async fn is_package_installed(&self, package: &str) -> bool {
        match self
            .runner
            .run_capture(
                "package check",
                "dpkg-query",
                &["-W", "-f=${Status}", package],
            )
            .await
        {
            Ok(status) => status.contains("install ok installed"),
            Err(e) => {
                debug!("dpkg-query for {} failed: {}", package, e);
                false
            }
        }
    }
}
