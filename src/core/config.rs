//! Per-repository workflow configuration.
//!
//! Stored as JSON at `<repo-root>/.branch-flow.json` so the whole team shares
//! the same tag prefix and branch names. A missing file yields defaults; a
//! malformed file is a hard error rather than a silent fallback.

use crate::core::error::{BranchFlowError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".branch-flow.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Prepended verbatim to every created tag name, no separator
    #[serde(default)]
    pub tag_prefix: String,
    /// Default target of the merge-request workflow
    #[serde(default = "default_test_branch")]
    pub test_branch: String,
    /// Remote branch new feature branches are cut from
    #[serde(default = "default_master_branch")]
    pub master_branch: String,
}

fn default_test_branch() -> String {
    "test".to_string()
}

fn default_master_branch() -> String {
    "master".to_string()
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            tag_prefix: String::new(),
            test_branch: default_test_branch(),
            master_branch: default_master_branch(),
        }
    }
}

impl FlowConfig {
    /// Load the repository's config, falling back to defaults when the file
    /// does not exist.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let config_file = repo_root.join(CONFIG_FILE_NAME);
        if !config_file.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_file)?;
        serde_json::from_str(&content)
            .map_err(|e| BranchFlowError::config_parse_failed(&config_file, e))
    }

    pub fn save(&self, repo_root: &Path) -> Result<()> {
        let config_file = repo_root.join(CONFIG_FILE_NAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BranchFlowError::config_parse_failed(&config_file, e))?;
        std::fs::write(&config_file, content)
            .map_err(|e| BranchFlowError::config_write_failed(&config_file, e))?;
        Ok(())
    }
}
