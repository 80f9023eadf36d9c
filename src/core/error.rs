//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`BranchFlowError`] which covers every failure mode of
//! the branch-flow engine. It uses `thiserror` for ergonomic error definitions
//! and includes specialized constructors for common failure scenarios.
//!
//! # Public API
//! - [`BranchFlowError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, BranchFlowError>`
//!
//! # Error Categories
//! - **Pre-condition failures**: No active repository, no remote configured,
//!   detached HEAD, raised before any command is issued
//! - **Command failures**: The external git invocation reported failure;
//!   error output preserved verbatim
//! - **Infrastructure**: git2 library errors, I/O, config (de)serialization

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for branch-flow
#[derive(Error, Debug)]
pub enum BranchFlowError {
    // Pre-condition failures: short-circuit before any command runs
    #[error("No active git repository found")]
    NoActiveRepository,

    #[error("Repository has no remote configured; add an 'origin' remote first")]
    NoRemoteConfigured,

    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,

    // Command failures: the executor reported a non-success status
    #[error("git command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // Infrastructure errors
    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using BranchFlowError
pub type Result<T> = std::result::Result<T, BranchFlowError>;

impl BranchFlowError {
    /// Create a command failed error from the audit line and error output
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
