// file: src/ui.rs
// version: 1.0.0
// guid: 92e5b7c1-3a48-4d06-bf29-8e0c4d61a735

//! Console presentation: banner, status lines and confirmation prompts

use crate::{InstallerError, Result};
use colored::Colorize;
use dialoguer::Confirm;

/// Display the startup banner
pub fn print_banner() {
    let banner = format!(
        "\n{}\n{}\n{}\n",
        "╔═══════════════════════════════════════════╗".blue().bold(),
        "║     Visual Studio Code Install Agent      ║".blue().bold(),
        "╚═══════════════════════════════════════════╝".blue().bold(),
    );
    println!("{}", banner);
}

/// Print a success status line
pub fn print_success(message: &str) {
    println!("{} {}", "[SUCCESS]".green().bold(), message);
}

/// Print an informational status line
pub fn print_info(message: &str) {
    println!("{} {}", "[INFO]".yellow().bold(), message);
}

/// Print an error status line
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Print the post-install launch hints
pub fn print_launch_hints(binary: &str) {
    println!("\n{}", "You can launch the application by:".green());
    println!("   1. Typing '{}' in the terminal", binary);
    println!("   2. Finding it in your application menu");
}

/// Ask for yes/no confirmation. `assume_yes` bypasses the prompt for
/// non-interactive use.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    // An interrupted or unreadable prompt counts as a cancellation
    Confirm::new()
        .with_prompt(prompt.yellow().to_string())
        .default(false)
        .interact()
        .map_err(|_| InstallerError::Cancelled)
}
