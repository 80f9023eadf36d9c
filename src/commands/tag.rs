//! Release tagging: create a prefixed tag, list existing tags.

use crate::commands::init_context;
use crate::core::{print_info, print_section_header, print_success, Result};

/// Create an annotated tag named `<configured prefix><name>`
pub fn execute_tag(name: &str, message: &str) -> Result<()> {
    let context = init_context()?;
    let full_name = format!("{}{}", context.ops.config().tag_prefix, name);

    context
        .ops
        .create_new_tag(&context.repo, name, message)?
        .require_success(&format!("git tag -a -f {full_name}"))?;

    print_success(&format!("Created tag '{full_name}'"));
    Ok(())
}

/// List all tags in the repository
pub fn execute_tag_list() -> Result<()> {
    let context = init_context()?;

    let result = context
        .ops
        .tag_list(&context.repo)?
        .require_success("git tag")?;

    if result.output.is_empty() {
        print_info("No tags yet");
    } else {
        print_section_header("Tags");
        for tag in &result.output {
            println!("  {tag}");
        }
    }
    Ok(())
}
