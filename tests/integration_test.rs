// file: tests/integration_test.rs
// version: 1.0.0
// guid: 2d7f9c35-8a41-4e60-b8d2-6c0e3f17a594

//! Integration tests for the VS Code install agent

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use vscode_install_agent::{
    config::{AppSpec, ConfigLoader},
    executor::StepRunner,
    installer::{repo::RepoManager, Installer},
    InstallerError, Result,
};

#[test]
fn test_spec_override_loading_integration() -> Result<()> {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
name: Example Editor
package: example-editor
binary: example
repo_line: "deb [arch=amd64 signed-by=/etc/apt/keyrings/example.gpg] https://pkgs.example.com/apt stable main"
repo_path: /etc/apt/sources.list.d/example.list
key_url: https://pkgs.example.com/keys/example.asc
keyring_path: /etc/apt/keyrings/example.gpg
prerequisites:
  - apt-transport-https
  - gpg
"#
    )
    .unwrap();

    let loader = ConfigLoader::new();
    let spec = loader.load_app_spec(file.path())?;

    assert_eq!(spec.name, "Example Editor");
    assert_eq!(spec.package, "example-editor");
    assert_eq!(spec.prerequisites.len(), 2);

    Ok(())
}

#[test]
fn test_spec_yaml_round_trip() -> Result<()> {
    let spec = AppSpec::vscode();
    let yaml = serde_yaml::to_string(&spec)?;
    let parsed: AppSpec = serde_yaml::from_str(&yaml)?;
    assert_eq!(spec, parsed);
    Ok(())
}

fn sandboxed_spec(dir: &TempDir) -> AppSpec {
    let mut spec = AppSpec::vscode();
    spec.name = "Ghost Editor".to_string();
    spec.package = "ghost-editor-test-12345".to_string();
    spec.binary = "ghost-editor-test-12345".to_string();
    spec.repo_path = dir
        .path()
        .join("sources.list.d/ghost.list")
        .to_string_lossy()
        .to_string();
    spec.keyring_path = dir
        .path()
        .join("keyrings/ghost.gpg")
        .to_string_lossy()
        .to_string();
    spec
}

#[tokio::test]
async fn test_repeated_registration_keeps_single_entry() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let spec = sandboxed_spec(&dir);
    let runner = StepRunner::new(false);
    let repo = RepoManager::new(&spec, &runner);

    repo.register_repo().await?;
    repo.register_repo().await?;
    repo.register_repo().await?;

    let content = std::fs::read_to_string(&spec.repo_path)?;
    assert_eq!(content.lines().count(), 1);
    assert_eq!(content.trim(), spec.repo_line);

    Ok(())
}

#[tokio::test]
async fn test_uninstall_when_absent_performs_no_mutation() {
    let dir = TempDir::new().unwrap();
    let spec = sandboxed_spec(&dir);

    // Pre-register the repo so a wrongly-ordered uninstall would delete it
    let runner = StepRunner::new(false);
    RepoManager::new(&spec, &runner)
        .register_repo()
        .await
        .unwrap();

    let installer = Installer::new(spec.clone(), false);
    let err = installer.uninstall(true).await.unwrap_err();
    assert!(matches!(err, InstallerError::NotInstalled(_)));

    // The precondition failure must leave the repo file untouched
    assert!(std::path::Path::new(&spec.repo_path).exists());
}

#[tokio::test]
async fn test_dry_run_install_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let spec = sandboxed_spec(&dir);

    let installer = Installer::new(spec.clone(), true);
    installer.install().await.unwrap();

    assert!(!std::path::Path::new(&spec.repo_path).exists());
    assert!(!std::path::Path::new(&spec.keyring_path).exists());
}

#[test]
fn test_cli_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("vscode-install-agent").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("uninstall"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("check-prereqs"));
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("vscode-install-agent").unwrap();
    cmd.arg("frobnicate").assert().failure();
}

#[test]
fn test_cli_status_json_is_well_formed() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("vscode-install-agent").unwrap();
    let output = cmd
        .current_dir(temp.path()) // log file lands in the scratch dir
        .args(["--quiet", "status", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('{').expect("no JSON object in output");
    let parsed: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert!(parsed.get("installed").is_some());
    assert_eq!(parsed["package"], "code");
}

#[test]
fn test_cli_writes_timestamped_log_file() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("vscode-install-agent").unwrap();
    cmd.current_dir(temp.path())
        .args(["--quiet", "status"])
        .assert()
        .success();

    let logs: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            name.starts_with("vscode-install-agent-") && name.ends_with(".log")
        })
        .collect();

    assert_eq!(logs.len(), 1);
}
