//! CLI command handlers.
//!
//! Thin presentation layer over the core engine: each handler resolves the
//! repository context, runs the relevant operations, and renders the outcome.
//! Workflow policy lives in `core`; these functions only translate between
//! the command line and the engine.

pub mod delete;
pub mod fetch;
pub mod init;
pub mod last_commit;
pub mod merge_request;
pub mod pull;
pub mod push;
pub mod start;
pub mod tag;

pub use delete::execute_delete;
pub use fetch::execute_fetch;
pub use init::execute_init;
pub use last_commit::execute_last_commit;
pub use merge_request::execute_merge_request;
pub use pull::execute_pull;
pub use push::execute_push;
pub use start::execute_start;
pub use tag::{execute_tag, execute_tag_list};

use crate::core::{ConsoleNotifier, FlowConfig, GitOps, Repo, Result, SystemGit};

/// Repository context shared by every handler
pub(crate) struct CommandContext {
    pub repo: Repo,
    pub ops: GitOps<SystemGit>,
}

/// Discover the repository from the current directory and wire the engine
/// with the system executor and console notifications.
pub(crate) fn init_context() -> Result<CommandContext> {
    let repo = Repo::discover(std::env::current_dir()?)?;
    let config = FlowConfig::load(repo.root())?;
    let ops = GitOps::new(SystemGit::new(), Box::new(ConsoleNotifier::new()), config);
    Ok(CommandContext { repo, ops })
}
