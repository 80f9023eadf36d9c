//! Command execution against the system git binary.
//!
//! The engine never spawns processes directly; it hands a [`CommandSpec`] to a
//! [`GitExecutor`]. Production code uses [`SystemGit`], tests substitute a fake
//! that returns scripted results. Long-running commands (merge, fetch) accept
//! [`LineListener`]s which receive each output line synchronously, in the
//! order the lines were produced.
//!
//! # Public API
//! - [`GitExecutor`]: The injected execution capability
//! - [`SystemGit`]: Executor backed by the installed `git` binary
//! - [`LineListener`] / [`OutputSource`]: Per-line observation seam

use crate::core::command::{CommandResult, CommandSpec, BASE_GIT_FLAGS};
use crate::core::error::Result;
use std::path::Path;
use std::process::Command;

/// Which stream a forwarded line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    Stdout,
    Stderr,
}

/// Receives one call per output line, in arrival order, on the executing
/// thread. Listeners must not assume a dedicated thread of their own.
pub trait LineListener {
    fn on_line(&mut self, line: &str, source: OutputSource);
}

/// The execution capability injected into the operation catalog.
///
/// Implementations run the spec against the working copy at `root` and return
/// the raw outcome; they never reinterpret success or failure.
pub trait GitExecutor {
    fn run(
        &self,
        root: &Path,
        spec: &CommandSpec,
        listeners: &mut [&mut dyn LineListener],
    ) -> Result<CommandResult>;
}

/// Executor backed by the installed `git` binary.
///
/// Captures both streams to completion, then replays stdout lines followed by
/// stderr lines through the listeners. Timeout policy is git's own; once a
/// command is issued it runs to completion.
#[derive(Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    pub fn new() -> Self {
        SystemGit
    }
}

impl GitExecutor for SystemGit {
    fn run(
        &self,
        root: &Path,
        spec: &CommandSpec,
        listeners: &mut [&mut dyn LineListener],
    ) -> Result<CommandResult> {
        let mut cmd = Command::new("git");
        cmd.args(BASE_GIT_FLAGS);
        cmd.arg(spec.verb().as_str());
        cmd.args(spec.params());
        cmd.current_dir(root);

        log::debug!("running: {}", spec.printable());
        let output = cmd.output()?;

        let stdout_lines = split_lines(&output.stdout);
        let stderr_lines = split_lines(&output.stderr);

        for line in &stdout_lines {
            for listener in listeners.iter_mut() {
                listener.on_line(line, OutputSource::Stdout);
            }
        }
        for line in &stderr_lines {
            for listener in listeners.iter_mut() {
                listener.on_line(line, OutputSource::Stderr);
            }
        }

        // Silent specs are plumbing-style queries whose output the caller
        // consumes; everything else is echoed for the user to follow along.
        if !spec.is_silent() {
            for line in stdout_lines.iter().chain(stderr_lines.iter()) {
                println!("{line}");
            }
        }

        Ok(CommandResult {
            success: output.status.success(),
            output: stdout_lines,
            error_output: stderr_lines,
        })
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    text.lines().map(str::to_string).collect()
}
