//! Pull the current branch from origin.

use crate::commands::init_context;
use crate::core::{print_success, Result};

pub fn execute_pull() -> Result<()> {
    let context = init_context()?;
    let branch = context.repo.current_branch()?;

    context
        .ops
        .pull(&context.repo, &branch)?
        .require_success(&format!("git pull origin {branch}:{branch}"))?;

    print_success(&format!("Pulled '{branch}' from origin"));
    Ok(())
}
