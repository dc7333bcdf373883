// file: src/cli/commands.rs
// version: 1.0.0
// guid: 4f2b8d61-9e05-4c73-b2a6-7d1f0e84c359

//! Command implementations for the CLI

use crate::{
    config::{AppSpec, ConfigLoader},
    installer::Installer,
    ui,
    utils::SystemUtils,
    InstallerError, Result,
};
use colored::Colorize;
use tracing::{info, warn};

/// Install the application
pub async fn install_command(yes: bool, dry_run: bool, config: Option<String>) -> Result<()> {
    let spec = ConfigLoader::new().resolve(config.as_deref())?;
    preflight(&spec, dry_run)?;

    let installer = Installer::new(spec.clone(), dry_run);

    if installer.check_installed().await {
        ui::print_info(&format!(
            "{} is already installed on this system.",
            spec.name
        ));
        return Err(InstallerError::AlreadyInstalled(spec.name));
    }

    if !ui::confirm(&format!("Install {}?", spec.name), yes)? {
        ui::print_info("Installation cancelled by user.");
        return Ok(());
    }

    info!("Starting {} installation", spec.name);
    installer.install().await?;

    ui::print_success(&format!("{} has been successfully installed!", spec.name));
    if !dry_run {
        ui::print_launch_hints(&spec.binary);
    }
    Ok(())
}

/// Uninstall the application
pub async fn uninstall_command(
    yes: bool,
    dry_run: bool,
    keep_repo: bool,
    config: Option<String>,
) -> Result<()> {
    let spec = ConfigLoader::new().resolve(config.as_deref())?;
    preflight(&spec, dry_run)?;

    let installer = Installer::new(spec.clone(), dry_run);

    if !installer.check_installed().await {
        ui::print_info(&format!("{} is not installed.", spec.name));
        return Err(InstallerError::NotInstalled(spec.name));
    }

    if !ui::confirm(&format!("Uninstall {}?", spec.name), yes)? {
        ui::print_info("Uninstall cancelled by user.");
        return Ok(());
    }

    info!("Uninstalling {}", spec.name);
    installer.uninstall(!keep_repo).await?;

    ui::print_success(&format!("{} has been successfully uninstalled!", spec.name));
    Ok(())
}

/// Show installation status
pub async fn status_command(json_output: bool, config: Option<String>) -> Result<()> {
    let spec = ConfigLoader::new().resolve(config.as_deref())?;
    let installer = Installer::new(spec, false);
    let status = installer.status().await;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}: {}", "Application".bold(), status.name);
    println!("{}: {}", "Package".bold(), status.package);
    println!(
        "{}: {}",
        "Installed".bold(),
        if status.installed {
            "yes".green()
        } else {
            "no".red()
        }
    );
    if let Some(path) = &status.binary_path {
        println!("{}: {}", "Binary".bold(), path);
    }
    println!(
        "{}: {}",
        "Package record".bold(),
        if status.package_installed { "present" } else { "absent" }
    );
    println!(
        "{}: {}",
        "Repository".bold(),
        if status.repo_registered { "registered" } else { "not registered" }
    );
    println!(
        "{}: {}",
        "Signing key".bold(),
        if status.key_registered { "registered" } else { "not registered" }
    );

    Ok(())
}

/// Check system prerequisites
pub async fn check_prereqs_command() -> Result<()> {
    if !SystemUtils::is_debian_like() {
        ui::print_error("This agent requires a Debian-based distribution (APT).");
        return Err(InstallerError::unsupported(
            "not a Debian-based distribution",
        ));
    }
    ui::print_info("Debian-based distribution detected.");

    let missing = SystemUtils::check_prerequisites();
    if missing.is_empty() {
        ui::print_success("All required host tools are available.");
    } else {
        ui::print_error(&format!("Missing required tools: {}", missing.join(", ")));
        return Err(InstallerError::precondition(format!(
            "missing required tools: {}",
            missing.join(", ")
        )));
    }

    if SystemUtils::is_root() {
        ui::print_info("Running with root privileges.");
    } else {
        ui::print_info("Not running as root; install/uninstall will need sudo.");
    }

    Ok(())
}

/// Shared precondition checks for the mutating commands
fn preflight(spec: &AppSpec, dry_run: bool) -> Result<()> {
    if !SystemUtils::is_debian_like() {
        return Err(InstallerError::unsupported(
            "this agent only supports Debian-based distributions",
        ));
    }

    let missing = SystemUtils::check_prerequisites();
    // gpg is itself part of the prerequisite package set, so only warn
    let hard_missing: Vec<&String> = missing.iter().filter(|t| t.as_str() != "gpg").collect();
    if !hard_missing.is_empty() {
        return Err(InstallerError::precondition(format!(
            "missing required tools: {}",
            hard_missing
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    if missing.iter().any(|t| t == "gpg") {
        warn!("gpg not found - it will be installed with the prerequisites");
    }

    if !dry_run && !SystemUtils::is_root() {
        return Err(InstallerError::permission(format!(
            "installing or removing {} requires root privileges (re-run with sudo)",
            spec.name
        )));
    }

    Ok(())
}
