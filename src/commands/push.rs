//! Push the current branch (and tags) to origin.

use crate::commands::init_context;
use crate::core::{print_success, Result};

pub fn execute_push(is_new_branch: bool) -> Result<()> {
    let context = init_context()?;
    let branch = context.repo.current_branch()?;

    context
        .ops
        .push(&context.repo, &branch, is_new_branch)?
        .require_success(&format!("git push origin {branch}:{branch}"))?;

    if is_new_branch {
        print_success(&format!("Pushed '{branch}' and set upstream tracking"));
    } else {
        print_success(&format!("Pushed '{branch}'"));
    }
    Ok(())
}
