//! Delete a branch locally and, on request, on origin.

use crate::commands::init_context;
use crate::core::{print_success, Result};

pub fn execute_delete(branch_name: &str, also_remote: bool) -> Result<()> {
    let context = init_context()?;

    context
        .ops
        .delete_local_branch(&context.repo, branch_name)?
        .require_success(&format!("git branch -D {branch_name}"))?;
    print_success(&format!("Deleted local branch '{branch_name}'"));

    if also_remote {
        context
            .ops
            .delete_remote_branch(&context.repo, branch_name)?
            .require_success(&format!("git push origin --delete {branch_name}"))?;
        print_success(&format!("Deleted remote branch '{branch_name}'"));
    }
    Ok(())
}
