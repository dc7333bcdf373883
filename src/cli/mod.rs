// file: src/cli/mod.rs
// version: 1.0.0
// guid: 61d8f3b7-2c95-4a04-8e6f-0b5a9c47d182

//! Command line interface for the VS Code install agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
