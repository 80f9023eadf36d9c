//! The git operation catalog.
//!
//! [`GitOps`] translates each workflow primitive into exactly one external
//! command invocation and returns the executor's [`CommandResult`] unchanged.
//! Success and failure are never reinterpreted here; that belongs to callers.
//! Every operation emits a human-readable audit line of the equivalent
//! command through the notification channel before the executor runs.
//!
//! Operations that touch the network resolve the default remote first and
//! fail fast with a typed error when none is configured; a command is never
//! built from an absent remote.
//!
//! # Public API
//! - [`GitOps`]: The operation catalog, generic over the executor
//! - [`FetchOutcome`]: Fetch result plus the refs pruned during the call

use crate::core::command::{CommandResult, CommandSpec, GitVerb};
use crate::core::config::FlowConfig;
use crate::core::error::Result;
use crate::core::executor::{GitExecutor, LineListener};
use crate::core::notify::Notifier;
use crate::core::output_scan::PruneDetector;
use crate::core::remote::default_remote;
use crate::core::repo::Repo;

/// Result of a [`GitOps::fetch`] call: the raw command outcome plus every
/// remote-tracking ref the fetch reported as deleted.
#[derive(Debug)]
pub struct FetchOutcome {
    pub result: CommandResult,
    pub pruned_refs: Vec<String>,
}

pub struct GitOps<E: GitExecutor> {
    pub(crate) executor: E,
    notifier: Box<dyn Notifier>,
    config: FlowConfig,
}

impl<E: GitExecutor> GitOps<E> {
    pub fn new(executor: E, notifier: Box<dyn Notifier>, config: FlowConfig) -> Self {
        GitOps {
            executor,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Audit line first, then the executor. Ordering is a contract, not a
    /// convenience: the line must be observable before the command runs.
    fn run(
        &self,
        repo: &Repo,
        spec: &CommandSpec,
        listeners: &mut [&mut dyn LineListener],
    ) -> Result<CommandResult> {
        self.notifier.command(&spec.printable());
        self.executor.run(repo.root(), spec, listeners)
    }

    /// Force-checkout `reference`, discarding local modifications. Dirty-state
    /// checks are the caller's responsibility.
    pub fn checkout(&self, repo: &Repo, reference: &str) -> Result<CommandResult> {
        let spec = CommandSpec::new(GitVerb::Checkout)
            .arg(reference)
            .arg("--force");
        self.run(repo, &spec, &mut [])
    }

    /// Create local branch `branch_name` tracking `origin/<branch_name>`.
    /// If the remote branch does not exist the executor's failure propagates
    /// unchanged.
    pub fn checkout_new_branch(&self, repo: &Repo, branch_name: &str) -> Result<CommandResult> {
        let spec = CommandSpec::new(GitVerb::Checkout)
            .arg("-b")
            .arg(branch_name)
            .arg(format!("origin/{branch_name}"));
        self.run(repo, &spec, &mut [])
    }

    /// Fetch remote `master` into local ref `new_branch_name`, force-updating
    /// an existing local ref of that name.
    pub fn fetch_new_branch_by_remote_master(
        &self,
        repo: &Repo,
        master: &str,
        new_branch_name: &str,
    ) -> Result<CommandResult> {
        let remote = default_remote(repo)?;
        if repo
            .inner()
            .find_branch(new_branch_name, git2::BranchType::Local)
            .is_ok()
        {
            log::warn!("local branch '{new_branch_name}' exists and will be overwritten");
        }
        let spec = CommandSpec::new(GitVerb::Fetch)
            .urls(remote.urls)
            .arg("origin")
            .arg(format!("{master}:{new_branch_name}"))
            .arg("-f");
        self.run(repo, &spec, &mut [])
    }

    /// Push the branch to its identically-named remote counterpart.
    pub fn push(&self, repo: &Repo, branch_name: &str, is_new_branch: bool) -> Result<CommandResult> {
        self.push_to(repo, branch_name, branch_name, is_new_branch)
    }

    /// Push `local_branch:remote_branch` plus tags; `is_new_branch` also
    /// establishes upstream tracking.
    pub fn push_to(
        &self,
        repo: &Repo,
        local_branch: &str,
        remote_branch: &str,
        is_new_branch: bool,
    ) -> Result<CommandResult> {
        let remote = default_remote(repo)?;
        let mut spec = CommandSpec::new(GitVerb::Push)
            .urls(remote.urls)
            .arg("origin")
            .arg(format!("{local_branch}:{remote_branch}"))
            .arg("--tags");
        if is_new_branch {
            spec = spec.arg("--set-upstream");
        }
        self.run(repo, &spec, &mut [])
    }

    /// Delete `branch_name` on the default remote.
    pub fn delete_remote_branch(&self, repo: &Repo, branch_name: &str) -> Result<CommandResult> {
        let remote = default_remote(repo)?;
        let spec = CommandSpec::new(GitVerb::Push)
            .urls(remote.urls)
            .arg("origin")
            .arg("--delete")
            .arg(branch_name);
        self.run(repo, &spec, &mut [])
    }

    /// Rename a local branch.
    pub fn rename_branch(
        &self,
        repo: &Repo,
        old_branch: &str,
        new_branch: &str,
    ) -> Result<CommandResult> {
        let spec = CommandSpec::new(GitVerb::Branch)
            .arg("-m")
            .arg(old_branch)
            .arg(new_branch);
        self.run(repo, &spec, &mut [])
    }

    /// Force-delete the local branch even if unmerged. A missing branch is a
    /// plain command failure carrying git's own message.
    pub fn delete_local_branch(&self, repo: &Repo, branch_name: &str) -> Result<CommandResult> {
        let spec = CommandSpec::new(GitVerb::Branch).arg("-D").arg(branch_name);
        self.run(repo, &spec, &mut [])
    }

    /// Create an annotated, force-overwriting tag named
    /// `<configured prefix><tag_name>`. Exact concatenation, no separator.
    pub fn create_new_tag(
        &self,
        repo: &Repo,
        tag_name: &str,
        message: &str,
    ) -> Result<CommandResult> {
        let full_name = format!("{}{}", self.config.tag_prefix, tag_name);
        let spec = CommandSpec::new(GitVerb::Tag)
            .arg("-a")
            .arg("-f")
            .arg("-m")
            .arg(message)
            .arg(full_name);
        self.run(repo, &spec, &mut [])
    }

    /// List all tags. Runs under a blocking progress scope: the call is
    /// synchronous and does not return before completion.
    pub fn tag_list(&self, repo: &Repo) -> Result<CommandResult> {
        self.notifier.progress("Getting existing tags");
        let spec = CommandSpec::new(GitVerb::Tag).silent();
        self.run(repo, &spec, &mut [])
    }

    /// Fetch from the default remote, feeding every output line through the
    /// prune detector for the duration of the call.
    pub fn fetch(&self, repo: &Repo) -> Result<FetchOutcome> {
        let remote = default_remote(repo)?;
        let spec = CommandSpec::new(GitVerb::Fetch).urls(remote.urls).arg("origin");
        let mut detector = PruneDetector::new();
        let result = self.run(repo, &spec, &mut [&mut detector])?;
        Ok(FetchOutcome {
            result,
            pruned_refs: detector.into_pruned_refs(),
        })
    }

    /// Fetch and merge `branch_name` into the identically-named local branch.
    pub fn pull(&self, repo: &Repo, branch_name: &str) -> Result<CommandResult> {
        let remote = default_remote(repo)?;
        let spec = CommandSpec::new(GitVerb::Pull)
            .urls(remote.urls)
            .arg("origin")
            .arg(format!("{branch_name}:{branch_name}"));
        self.run(repo, &spec, &mut [])
    }

    /// Merge `branch_to_merge` into the current branch, forwarding raw output
    /// lines to the listeners as they arrive.
    pub fn merge(
        &self,
        repo: &Repo,
        branch_to_merge: &str,
        listeners: &mut [&mut dyn LineListener],
    ) -> Result<CommandResult> {
        let spec = CommandSpec::new(GitVerb::Merge).arg(branch_to_merge);
        let current = repo
            .current_branch()
            .unwrap_or_else(|_| "(detached)".to_string());
        self.notifier.command(&format!(
            "{} ['{branch_to_merge}' merge into '{current}']",
            spec.printable()
        ));
        self.executor.run(repo.root(), &spec, listeners)
    }

    /// Single-line summary (author email, date, subject) of the tip commit of
    /// `origin/<remote_branch_name>`.
    pub fn show_remote_last_commit(
        &self,
        repo: &Repo,
        remote_branch_name: &str,
    ) -> Result<CommandResult> {
        let remote = default_remote(repo)?;
        let spec = CommandSpec::new(GitVerb::Show)
            .urls(remote.urls)
            .arg(format!("origin/{remote_branch_name}"))
            .arg("-s")
            .arg("--format=Author:%ae-Date:%ad-Message:%s")
            .arg("--date=format:%Y-%m-%d_%H:%M:%S");
        self.run(repo, &spec, &mut [])
    }

    /// Configured `user.email`, NUL-delimited, non-interactively.
    pub fn get_user_email(&self, repo: &Repo) -> Result<CommandResult> {
        let spec = CommandSpec::new(GitVerb::Config)
            .silent()
            .arg("--null")
            .arg("--get")
            .arg("user.email");
        self.run(repo, &spec, &mut [])
    }
}
