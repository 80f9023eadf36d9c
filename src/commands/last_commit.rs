//! Show the tip commit of a remote branch.

use crate::commands::init_context;
use crate::core::{print_info, Result};

pub fn execute_last_commit(remote_branch: &str) -> Result<()> {
    let context = init_context()?;

    let result = context
        .ops
        .show_remote_last_commit(&context.repo, remote_branch)?
        .require_success(&format!("git show origin/{remote_branch} -s"))?;

    for line in &result.output {
        print_info(line);
    }
    Ok(())
}
