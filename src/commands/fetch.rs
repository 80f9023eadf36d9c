//! Fetch from origin, reporting any pruned remote refs.

use crate::commands::init_context;
use crate::core::{print_section_header, print_success, Result};

pub fn execute_fetch() -> Result<()> {
    let context = init_context()?;

    let outcome = context.ops.fetch(&context.repo)?;
    outcome.result.require_success("git fetch origin")?;

    print_success("Fetched origin");
    if !outcome.pruned_refs.is_empty() {
        print_section_header("Deleted on remote");
        for reference in &outcome.pruned_refs {
            println!("  {reference}");
        }
    }
    Ok(())
}
