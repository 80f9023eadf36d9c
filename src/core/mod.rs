//! Core functionality for the branch-flow engine.
//!
//! This module provides the building blocks of the orchestration layer:
//! command specs and results, the executor seam, the operation catalog, the
//! merge-request workflow, output scanning, and the ambient pieces (errors,
//! config, notifications).

pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod flow;
pub mod git;
pub mod notify;
pub mod output;
pub mod output_scan;
pub mod refresh;
pub mod remote;
pub mod repo;

#[cfg(test)]
pub mod testing;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{BranchFlowError, Result};

// === Command model ===
// Immutable command descriptions and normalized command outcomes
pub use command::{CommandResult, CommandSpec, GitVerb};

// === Execution ===
// The injected executor capability and the system-git implementation
pub use executor::{GitExecutor, LineListener, OutputSource, SystemGit};

// === Repository metadata ===
pub use remote::{default_remote, Remote};
pub use repo::Repo;

// === Operation catalog ===
pub use git::{FetchOutcome, GitOps};

// === Workflows ===
pub use flow::{merge_request, MergeRequestOptions, MergeRequestOutcome};

// === Output interpretation ===
pub use output_scan::{extract_review_link, PruneDetector};

// === Configuration ===
pub use config::{FlowConfig, CONFIG_FILE_NAME};

// === Notifications and refresh ===
pub use notify::{ConsoleNotifier, Notifier};
pub use refresh::{RepoRefresh, WorkingCopyRefresh};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
