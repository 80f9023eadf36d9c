//! Merge-request workflow: merge the current branch into the test branch.

use crate::commands::init_context;
use crate::core::{merge_request, MergeRequestOptions, MergeRequestOutcome, Result, WorkingCopyRefresh};

/// Run the merge-request workflow against the current repository. The
/// workflow itself reports success, failure, and any extracted review link
/// through the notification channel; this handler only maps the terminal
/// state to an exit code.
pub fn execute_merge_request() -> Result<()> {
    let context = init_context()?;
    let refresh = WorkingCopyRefresh::new();

    let outcome = merge_request(
        &context.ops,
        &context.repo,
        MergeRequestOptions::default(),
        &refresh,
    )?;

    if let MergeRequestOutcome::Failed { .. } = outcome {
        std::process::exit(1);
    }
    Ok(())
}
