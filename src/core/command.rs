//! Command specifications and results for external git invocations.
//!
//! A [`CommandSpec`] is built once per operation, is immutable after
//! construction, and is consumed exactly once by the executor. The matching
//! [`CommandResult`] carries the raw success flag and both output streams as
//! ordered lines; downstream code may re-scan the lines as often as it needs.
//!
//! # Public API
//! - [`GitVerb`]: The git subcommand a spec runs
//! - [`CommandSpec`]: Builder-style command description with audit rendering
//! - [`CommandResult`]: Normalized outcome of one git invocation

use crate::core::error::{BranchFlowError, Result};

/// Configuration switches prepended to every git invocation so output is
/// stable enough to scan (unquoted paths, no signature noise).
pub const BASE_GIT_FLAGS: [&str; 4] = [
    "-c",
    "core.quotepath=false",
    "-c",
    "log.showSignature=false",
];

/// The git subcommand a [`CommandSpec`] runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitVerb {
    Checkout,
    Fetch,
    Push,
    Pull,
    Merge,
    Branch,
    Tag,
    Show,
    Config,
}

impl GitVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            GitVerb::Checkout => "checkout",
            GitVerb::Fetch => "fetch",
            GitVerb::Push => "push",
            GitVerb::Pull => "pull",
            GitVerb::Merge => "merge",
            GitVerb::Branch => "branch",
            GitVerb::Tag => "tag",
            GitVerb::Show => "show",
            GitVerb::Config => "config",
        }
    }
}

/// Immutable description of a single git invocation.
///
/// Built with the builder methods, then handed to the executor. Remote URLs
/// are attached for network-touching commands so the executor (or a test
/// double) can see which remote the operation resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    verb: GitVerb,
    params: Vec<String>,
    remote_urls: Vec<String>,
    silent: bool,
}

impl CommandSpec {
    pub fn new(verb: GitVerb) -> Self {
        CommandSpec {
            verb,
            params: Vec::new(),
            remote_urls: Vec::new(),
            silent: false,
        }
    }

    pub fn arg(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn urls(mut self, urls: Vec<String>) -> Self {
        self.remote_urls = urls;
        self
    }

    /// Suppress per-line output forwarding; used for plumbing-style queries
    /// like `config --get` and `tag` listing.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn verb(&self) -> GitVerb {
        self.verb
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn remote_urls(&self) -> &[String] {
        &self.remote_urls
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Human-readable equivalent of the full command line, emitted to the
    /// notification channel before the command runs.
    pub fn printable(&self) -> String {
        let mut line = String::from("git");
        for flag in BASE_GIT_FLAGS {
            line.push(' ');
            line.push_str(flag);
        }
        line.push(' ');
        line.push_str(self.verb.as_str());
        for param in &self.params {
            line.push(' ');
            line.push_str(param);
        }
        line
    }
}

/// Normalized outcome of a single git invocation: success flag plus both
/// output streams split into ordered lines.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    pub success: bool,
    pub output: Vec<String>,
    pub error_output: Vec<String>,
}

impl CommandResult {
    pub fn ok(output: Vec<String>, error_output: Vec<String>) -> Self {
        CommandResult {
            success: true,
            output,
            error_output,
        }
    }

    pub fn failed(error_output: Vec<String>) -> Self {
        CommandResult {
            success: false,
            output: Vec::new(),
            error_output,
        }
    }

    pub fn output_as_joined_string(&self) -> String {
        self.output.join("\n")
    }

    pub fn error_output_as_joined_string(&self) -> String {
        self.error_output.join("\n")
    }

    /// Turn a non-success result into a typed [`CommandFailed`] error carrying
    /// the audit line and git's own error text verbatim.
    ///
    /// [`CommandFailed`]: BranchFlowError::CommandFailed
    pub fn require_success(self, command: &str) -> Result<CommandResult> {
        if self.success {
            Ok(self)
        } else {
            Err(BranchFlowError::command_failed(
                command,
                self.error_output_as_joined_string(),
            ))
        }
    }
}
