//! Write a default workflow config into the repository.

use crate::core::{print_info, print_success, FlowConfig, Repo, Result, CONFIG_FILE_NAME};

/// Create `.branch-flow.json` with default values so the team can edit the
/// tag prefix and branch names in one shared place. Never overwrites an
/// existing file.
pub fn execute_init() -> Result<()> {
    let repo = Repo::discover(std::env::current_dir()?)?;
    let config_file = repo.root().join(CONFIG_FILE_NAME);

    if config_file.exists() {
        print_info(&format!("{CONFIG_FILE_NAME} already exists"));
        return Ok(());
    }

    FlowConfig::default().save(repo.root())?;
    print_success(&format!("Created {CONFIG_FILE_NAME}"));
    Ok(())
}
