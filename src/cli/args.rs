// file: src/cli/args.rs
// version: 1.0.0
// guid: 50c7e2a9-6f14-4b83-97d0-3e8b1f62c594

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vscode-install-agent")]
#[command(about = "Install or remove Visual Studio Code on Debian-based systems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install the application and register the vendor repository
    Install {
        #[arg(short, long, help = "Answer yes to confirmation prompts")]
        yes: bool,

        #[arg(long, help = "Show what would be done without executing")]
        dry_run: bool,

        #[arg(short, long, help = "Path to an application spec override (YAML)")]
        config: Option<String>,
    },

    /// Uninstall the application
    Uninstall {
        #[arg(short, long, help = "Answer yes to confirmation prompts")]
        yes: bool,

        #[arg(long, help = "Show what would be done without executing")]
        dry_run: bool,

        #[arg(long, help = "Keep the vendor repository and signing key registered")]
        keep_repo: bool,

        #[arg(short, long, help = "Path to an application spec override (YAML)")]
        config: Option<String>,
    },

    /// Show installation status
    Status {
        #[arg(short, long)]
        json: bool,

        #[arg(short, long, help = "Path to an application spec override (YAML)")]
        config: Option<String>,
    },

    /// Check system prerequisites
    CheckPrereqs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_install_flags() {
        let cli = Cli::parse_from(["vscode-install-agent", "install", "--yes", "--dry-run"]);
        match cli.command {
            Commands::Install { yes, dry_run, config } => {
                assert!(yes);
                assert!(dry_run);
                assert!(config.is_none());
            }
            _ => panic!("expected install subcommand"),
        }
    }

    #[test]
    fn test_parse_uninstall_keep_repo() {
        let cli = Cli::parse_from(["vscode-install-agent", "uninstall", "-y", "--keep-repo"]);
        match cli.command {
            Commands::Uninstall { yes, keep_repo, .. } => {
                assert!(yes);
                assert!(keep_repo);
            }
            _ => panic!("expected uninstall subcommand"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["vscode-install-agent", "--verbose", "status"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
