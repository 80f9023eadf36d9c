//! Repository handle and metadata queries.
//!
//! The engine never owns repository state: it queries the working copy before
//! an operation and expects callers to refresh afterwards. [`Repo`] wraps a
//! `git2` repository purely for metadata discovery (root path, current
//! branch, remote enumeration); all mutations go through the executor.

use crate::core::error::{BranchFlowError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

pub struct Repo {
    repo: Repository,
    root: PathBuf,
}

impl std::fmt::Debug for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repo")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Repo {
    /// Discover the repository containing `path`, walking up parent
    /// directories the way git itself does.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                BranchFlowError::NoActiveRepository
            } else {
                BranchFlowError::GitRepo(e)
            }
        })?;
        let root = repo
            .workdir()
            .ok_or(BranchFlowError::NoActiveRepository)?
            .to_path_buf();
        Ok(Repo { repo, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Short name of the currently checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(BranchFlowError::DetachedHead);
        }
        head.shorthand()
            .map(str::to_string)
            .ok_or(BranchFlowError::DetachedHead)
    }

    /// Remote names in declaration order, as git2 reports them.
    pub fn remote_names(&self) -> Result<Vec<String>> {
        let names = self.repo.remotes()?;
        Ok(names.iter().flatten().map(str::to_string).collect())
    }

    /// URLs configured for the named remote (fetch URL, plus push URL when
    /// one is set separately).
    pub fn remote_urls(&self, name: &str) -> Result<Vec<String>> {
        let remote = self.repo.find_remote(name)?;
        let mut urls = Vec::new();
        if let Some(url) = remote.url() {
            urls.push(url.to_string());
        }
        if let Some(push_url) = remote.pushurl() {
            urls.push(push_url.to_string());
        }
        Ok(urls)
    }

    pub(crate) fn inner(&self) -> &Repository {
        &self.repo
    }
}
