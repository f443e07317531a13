//! Error types for Odeploy
//!
//! Uses `thiserror` for library errors.

use thiserror::Error;

/// Result type alias for Odeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for Odeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Duplicate command name when building a registry
    #[error("duplicate command name '{name}' in registry")]
    DuplicateCommand { name: String },

    /// A command was registered with no targets
    #[error("command '{name}' has no targets")]
    EmptyTargets { name: String },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
