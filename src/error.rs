// file: src/error.rs
// version: 1.0.0
// guid: 7c1e4a92-5d38-4b06-9f2a-83d6c0e17b45

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, InstallerError>;

/// Error types for the VS Code install agent
#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Step '{step}' failed: {detail}")]
    Step { step: String, detail: String },

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("{0} is already installed")]
    AlreadyInstalled(String),

    #[error("{0} is not installed")]
    NotInstalled(String),

    #[error("Unsupported system: {0}")]
    Unsupported(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl InstallerError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new step failure naming the failing step
    pub fn step(step: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Step {
            step: step.into(),
            detail: detail.into(),
        }
    }

    /// Create a new precondition error
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Create a new unsupported-system error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a new permission error
    pub fn permission(msg: impl Into<String>) -> Self {
        Self::Permission(msg.into())
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
