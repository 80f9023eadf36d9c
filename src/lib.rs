//! Branch Flow - branch-flow orchestration atop git.
//!
//! This library sequences git operations into higher-level team workflows:
//! feature branches cut from the remote master, pushes with tag and upstream
//! handling, prune detection during fetch, prefixed release tags, and a
//! merge-request flow that merges the current branch into a shared test
//! branch and surfaces a generated review link.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - The operation catalog ([`GitOps`]) and its executor seam
//! - The merge-request workflow ([`merge_request`])
//! - Output interpretation (prune detection, review-link extraction)
//! - Error handling, configuration, and notification channels

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    default_remote,
    extract_review_link,
    merge_request,

    // Error handling
    BranchFlowError,
    // Command model
    CommandResult,
    CommandSpec,
    // Notifications
    ConsoleNotifier,
    FetchOutcome,
    // Configuration
    FlowConfig,
    // Execution
    GitExecutor,
    // Operation catalog
    GitOps,
    GitVerb,
    LineListener,
    // Workflows
    MergeRequestOptions,
    MergeRequestOutcome,
    Notifier,
    OutputSource,
    // Output interpretation
    PruneDetector,
    Remote,
    // Repository metadata
    Repo,
    RepoRefresh,
    Result,
    SystemGit,
    WorkingCopyRefresh,
};
