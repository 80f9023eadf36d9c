//! Structured-fact extraction from raw git output.
//!
//! Two independent line scanners:
//!
//! - [`PruneDetector`] watches fetch output for `x [deleted] ... -> <ref>`
//!   lines and accumulates the pruned remote-tracking ref names.
//! - [`extract_review_link`] pulls a review address out of a merge's error
//!   output. This is a best-effort heuristic against a specific server's
//!   message format; when the expected shape is absent it yields `None` and
//!   the caller simply reports the raw text.

use crate::core::command::CommandResult;
use crate::core::executor::{LineListener, OutputSource};
use regex::Regex;

/// Accumulates remote-tracking refs reported as deleted during one fetch.
///
/// Fed every output line of the fetch; non-matching lines are ignored. The
/// collected set lives only for the duration of that fetch call.
pub struct PruneDetector {
    pattern: Regex,
    pruned_refs: Vec<String>,
}

impl PruneDetector {
    pub fn new() -> Self {
        // e.g. "  x [deleted]         (none)     -> origin/feature-a"
        let pattern = Regex::new(r"^\s*x\s*\[deleted\].*->\s*(\S*)$")
            .unwrap_or_else(|e| unreachable!("invalid prune pattern: {e}"));
        PruneDetector {
            pattern,
            pruned_refs: Vec::new(),
        }
    }

    pub fn pruned_refs(&self) -> &[String] {
        &self.pruned_refs
    }

    pub fn into_pruned_refs(self) -> Vec<String> {
        self.pruned_refs
    }
}

impl Default for PruneDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LineListener for PruneDetector {
    fn on_line(&mut self, line: &str, _source: OutputSource) {
        if let Some(captures) = self.pattern.captures(line) {
            if let Some(reference) = captures.get(1) {
                self.pruned_refs.push(reference.as_str().to_string());
            }
        }
    }
}

/// Separator the review server uses between columns of its summary line
const LINK_SEPARATOR: &str = "   ";

/// Index of the error-output line carrying the review address
const LINK_LINE_INDEX: usize = 2;

/// Best-effort extraction of a review address from merge output.
///
/// The server prints the address as the second triple-space-separated segment
/// of the third error line, and only when it emits more than three lines.
/// Any deviation from that shape yields `None` without error.
pub fn extract_review_link(result: &CommandResult) -> Option<String> {
    if result.error_output.len() <= 3 {
        return None;
    }
    let line = result.error_output.get(LINK_LINE_INDEX)?;
    let mut segments = line.split(LINK_SEPARATOR);
    segments.next()?;
    segments.next().map(str::to_string)
}
