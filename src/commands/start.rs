//! Start a feature branch from the remote master.

use crate::commands::init_context;
use crate::core::{print_success, Result};

/// Fetch the configured remote master into a fresh local branch and check it
/// out. Re-running with the same name force-updates the local branch.
pub fn execute_start(branch_name: &str) -> Result<()> {
    let context = init_context()?;
    let master = context.ops.config().master_branch.clone();

    context
        .ops
        .fetch_new_branch_by_remote_master(&context.repo, &master, branch_name)?
        .require_success(&format!("git fetch origin {master}:{branch_name} -f"))?;

    context
        .ops
        .checkout(&context.repo, branch_name)?
        .require_success(&format!("git checkout {branch_name} --force"))?;

    print_success(&format!(
        "Created branch '{branch_name}' from origin/{master}"
    ));
    Ok(())
}
