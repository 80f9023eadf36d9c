//! Default-remote resolution.
//!
//! A repository either has zero remotes, in which case every network-touching
//! operation fails fast with [`NoRemoteConfigured`], or the first-declared
//! remote is used deterministically. There is no selection heuristic beyond
//! declaration order.
//!
//! [`NoRemoteConfigured`]: crate::core::error::BranchFlowError::NoRemoteConfigured

use crate::core::error::{BranchFlowError, Result};
use crate::core::repo::Repo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub urls: Vec<String>,
}

/// Resolve the repository's default remote or fail fast.
///
/// Never returns a placeholder: an operation that needs a remote must not
/// build a command at all when none is configured.
pub fn default_remote(repo: &Repo) -> Result<Remote> {
    let names = repo.remote_names()?;
    let name = names
        .into_iter()
        .next()
        .ok_or(BranchFlowError::NoRemoteConfigured)?;
    let urls = repo.remote_urls(&name)?;
    Ok(Remote { name, urls })
}
