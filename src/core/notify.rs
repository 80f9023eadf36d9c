//! Notification and audit channel.
//!
//! Every operation announces the equivalent command line through this channel
//! before it runs, and workflows report their outcome through it. The engine
//! only depends on the [`Notifier`] trait; the CLI installs
//! [`ConsoleNotifier`], tests install a recording implementation to assert
//! the audit-before-execute ordering.

use crate::core::output;
use colored::*;

pub trait Notifier {
    /// Audit line: the human-readable command about to run
    fn command(&self, line: &str);
    /// Workflow-level success with accompanying output text
    fn success(&self, title: &str, message: &str);
    /// Workflow-level failure with the tool's error text verbatim
    fn error(&self, title: &str, message: &str);
    /// A clickable address extracted from command output
    fn link(&self, address: &str);
    /// User-visible progress indication for blocking calls
    fn progress(&self, label: &str);
}

/// Console renderer used by the CLI, built on the shared output helpers
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        ConsoleNotifier
    }
}

impl Notifier for ConsoleNotifier {
    fn command(&self, line: &str) {
        output::print_command(line);
    }

    fn success(&self, title: &str, message: &str) {
        if message.is_empty() {
            output::print_success(title);
        } else {
            output::print_success(title);
            println!("{}", message.white());
        }
    }

    fn error(&self, title: &str, message: &str) {
        println!(
            "\n{} {}\n{}",
            "✕ Error:".red(),
            title.white(),
            message.white()
        );
    }

    fn link(&self, address: &str) {
        output::print_link(address);
    }

    fn progress(&self, label: &str) {
        println!("{}", format!("{label}...").bright_black());
    }
}
