// file: src/main.rs
// version: 1.0.0
// guid: 38e6c0d4-7b29-4f15-a9c7-5d2e8f03b641

//! VS Code Install Agent - Main entry point

use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use vscode_install_agent::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging::logger,
    ui,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_path = match logger::init_logger(cli.verbose, cli.quiet) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    if !cli.quiet {
        ui::print_banner();
    }
    info!("Logging to {}", log_path.display());

    // Set up signal handling for graceful shutdown
    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting...");
    };

    let command_future = async {
        match cli.command {
            Commands::Install { yes, dry_run, config } => {
                install_command(yes, dry_run, config).await
            }
            Commands::Uninstall {
                yes,
                dry_run,
                keep_repo,
                config,
            } => uninstall_command(yes, dry_run, keep_repo, config).await,
            Commands::Status { json, config } => status_command(json, config).await,
            Commands::CheckPrereqs => check_prereqs_command().await,
        }
    };

    // Run command with signal handling
    let result = tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Operation interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}
