// file: src/lib.rs
// version: 1.0.0
// guid: a4d9f2c7-1b8e-4e53-bc06-92f7d3a18e60

//! # VS Code Install Agent
//!
//! A command-line installer/uninstaller for Visual Studio Code on Debian-based
//! Linux distributions. Registers the Microsoft APT repository and signing key,
//! drives apt-get to install or remove the package, and reports progress to the
//! console and a timestamped log file.
//!
//! All package resolution, download and verification is delegated to APT and
//! the GPG tooling; this crate only sequences the external commands.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod installer;
pub mod logging;
pub mod ui;
pub mod utils;

pub use error::{InstallerError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
