//! Repository-change broadcast.
//!
//! After a workflow completes, the working copy may have changed regardless
//! of logical success (a failed merge still leaves conflict markers). The
//! orchestrator signals that through [`RepoRefresh`] exactly once per
//! invocation; whatever owns presentation decides what refreshing means.

use crate::core::repo::Repo;

pub trait RepoRefresh {
    fn repository_changed(&self, repo: &Repo);
}

/// Refresh implementation for the CLI: re-reads HEAD so the handle reflects
/// the post-workflow state, and reports the position at debug level.
#[derive(Debug, Default)]
pub struct WorkingCopyRefresh;

impl WorkingCopyRefresh {
    pub fn new() -> Self {
        WorkingCopyRefresh
    }
}

impl RepoRefresh for WorkingCopyRefresh {
    fn repository_changed(&self, repo: &Repo) {
        match repo.inner().head() {
            Ok(head) => log::debug!(
                "repository refreshed, HEAD at {}",
                head.shorthand().unwrap_or("(detached)")
            ),
            Err(e) => log::debug!("repository refreshed, HEAD unreadable: {e}"),
        }
    }
}
