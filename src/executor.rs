// file: src/executor.rs
// version: 1.0.0
// guid: e8b1d4f6-7a29-4c05-9e3b-1f6c8a40d572

//! External command execution for installation steps
//!
//! Every mutation this agent performs goes through [`StepRunner`]: a non-zero
//! exit status from any external command halts the run and surfaces the name
//! of the failing step. There is no retry and no rollback; APT owns whatever
//! transactional guarantees exist.

use crate::{InstallerError, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Runner for the external commands that make up install/uninstall steps
#[derive(Debug, Clone)]
pub struct StepRunner {
    dry_run: bool,
}

impl StepRunner {
    /// Create a new runner
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Whether this runner is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run a mutating command, streaming its output to the operator.
    ///
    /// In dry-run mode the command is logged and nothing is executed.
    pub async fn run(
        &self,
        step: &str,
        program: &str,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> Result<()> {
        if self.dry_run {
            info!("DRY RUN: would execute: {} {}", program, args.join(" "));
            return Ok(());
        }

        debug!("Executing: {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let status = cmd.status().await.map_err(|e| {
            InstallerError::step(step, format!("failed to spawn {}: {}", program, e))
        })?;

        if !status.success() {
            return Err(InstallerError::step(
                step,
                format!(
                    "{} exited with code {}",
                    program,
                    status.code().unwrap_or(-1)
                ),
            ));
        }

        Ok(())
    }

    /// Run a query command and capture its stdout.
    ///
    /// Queries are read-only and execute even in dry-run mode.
    pub async fn run_capture(&self, step: &str, program: &str, args: &[&str]) -> Result<String> {
        debug!("Executing (capture): {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                InstallerError::step(step, format!("failed to spawn {}: {}", program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InstallerError::step(
                step,
                format!(
                    "{} exited with code {}: {}",
                    program,
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
