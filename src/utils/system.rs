// file: src/utils/system.rs
// version: 1.0.0
// guid: d5f0b2c8-9e14-4a67-b3d9-7c2e6f81a053

//! Host system inspection
//!
//! Read-only checks used by preconditions and the status command. Nothing in
//! this module mutates the system.

use std::path::PathBuf;

/// Host tools the agent shells out to
pub const REQUIRED_TOOLS: &[&str] = &["apt-get", "dpkg-query", "gpg"];

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Resolve the full path of a binary on PATH
    pub fn binary_path(binary: &str) -> Option<PathBuf> {
        which::which(binary).ok()
    }

    /// Check if running as root
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::geteuid() == 0 }
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    /// Check whether the host is a Debian-family distribution
    pub fn is_debian_like() -> bool {
        match std::fs::read_to_string("/etc/os-release") {
            Ok(content) => Self::os_release_is_debian_like(&content),
            Err(_) => false,
        }
    }

    /// Parse os-release content for a Debian-family ID or ID_LIKE
    pub fn os_release_is_debian_like(content: &str) -> bool {
        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if key != "ID" && key != "ID_LIKE" {
                continue;
            }
            let value = value.trim_matches('"');
            if value
                .split_whitespace()
                .any(|id| id == "debian" || id == "ubuntu")
            {
                return true;
            }
        }
        false
    }

    /// Return the required host tools missing from PATH
    pub fn check_prerequisites() -> Vec<String> {
        REQUIRED_TOOLS
            .iter()
            .filter(|tool| !Self::command_exists(tool))
            .map(|tool| tool.to_string())
            .collect()
    }
}
