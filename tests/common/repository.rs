//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories, including
//! a bare `origin` remote with seed and work clones for network-flavored
//! scenarios, all inside temporary directories.

#![allow(dead_code)]

use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A bare `origin` plus two clones: `seed` (drives the remote's state from
/// the outside) and `work` (the repository under test).
pub struct RemoteFixture {
    pub temp_dir: TempDir,
    pub remote_path: PathBuf,
    pub seed_path: PathBuf,
    pub work_path: PathBuf,
}

/// Run a git command in `dir`, failing the test on non-zero exit
pub fn git(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()?;
    if !output.status.success() {
        bail!(
            "git {:?} failed in {}: {}",
            args,
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

/// Run a git command in `dir`, returning whether it succeeded
pub fn git_ok(dir: &Path, args: &[&str]) -> bool {
    std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn configure_user(dir: &Path) -> Result<()> {
    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

/// Write a file, stage it and commit it
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) -> Result<()> {
    fs::write(dir.join(name), content)?;
    git(dir, &["add", name])?;
    git(dir, &["commit", "-m", message])?;
    Ok(())
}

/// Sets up a fresh git repository with one commit on `master`
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();

    git(&path, &["init"])?;
    configure_user(&path)?;
    git(&path, &["checkout", "-B", "master"])?;
    commit_file(&path, "README.md", "# test repo\n", "initial commit")?;

    Ok(TestRepo { temp_dir, path })
}

/// Sets up a bare `origin` with an initial `master` commit and two clones.
///
/// The bare repository's HEAD is pinned to `refs/heads/master` so clones
/// check out a deterministic branch regardless of the host's git defaults.
pub fn setup_repo_with_remote() -> Result<RemoteFixture> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_path_buf();

    let remote_path = root.join("origin.git");
    git(&root, &["init", "--bare", "origin.git"])?;
    git(&remote_path, &["symbolic-ref", "HEAD", "refs/heads/master"])?;

    let seed_path = root.join("seed");
    git(&root, &["init", "seed"])?;
    configure_user(&seed_path)?;
    git(&seed_path, &["checkout", "-B", "master"])?;
    commit_file(&seed_path, "README.md", "# shared repo\n", "initial commit")?;
    let remote_str = remote_path.to_string_lossy().to_string();
    git(&seed_path, &["remote", "add", "origin", &remote_str])?;
    git(&seed_path, &["push", "origin", "master"])?;

    let work_path = root.join("work");
    git(&root, &["clone", &remote_str, "work"])?;
    configure_user(&work_path)?;

    Ok(RemoteFixture {
        temp_dir,
        remote_path,
        seed_path,
        work_path,
    })
}

/// Push a new branch to the bare remote from the seed clone and make it
/// visible in the work clone's remote-tracking refs
pub fn publish_remote_branch(fixture: &RemoteFixture, name: &str) -> Result<()> {
    git(
        &fixture.seed_path,
        &["push", "origin", &format!("master:{name}")],
    )?;
    git(&fixture.work_path, &["fetch", "origin"])?;
    Ok(())
}
