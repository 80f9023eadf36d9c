//! Shared test doubles for the engine's unit tests.
//!
//! `FakeGit` records every spec it is asked to run and replays scripted
//! results, feeding their lines through any attached listeners the way the
//! real executor does. `RecordingNotifier` shares an [`EventLog`] with the
//! fake so ordering invariants (audit line before execution) are assertable.

use crate::core::command::{CommandResult, CommandSpec};
use crate::core::executor::{GitExecutor, LineListener, OutputSource};
use crate::core::notify::Notifier;
use crate::core::refresh::RepoRefresh;
use crate::core::repo::Repo;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

/// Ordered record of notifier and executor events, shared between doubles
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<String>>>,
}

impl EventLog {
    pub fn push(&self, event: String) {
        self.events.borrow_mut().push(event);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

/// Executor double: records specs, replays scripted results in FIFO order
/// (success with empty output when nothing is scripted).
pub struct FakeGit {
    log: EventLog,
    scripted: RefCell<VecDeque<CommandResult>>,
    specs: RefCell<Vec<CommandSpec>>,
}

impl FakeGit {
    pub fn new(log: EventLog) -> Self {
        FakeGit {
            log,
            scripted: RefCell::new(VecDeque::new()),
            specs: RefCell::new(Vec::new()),
        }
    }

    /// Queue the result the next run will return
    pub fn script(&self, result: CommandResult) {
        self.scripted.borrow_mut().push_back(result);
    }

    pub fn last_spec(&self) -> Option<CommandSpec> {
        self.specs.borrow().last().cloned()
    }

    pub fn specs(&self) -> Vec<CommandSpec> {
        self.specs.borrow().clone()
    }
}

impl GitExecutor for FakeGit {
    fn run(
        &self,
        _root: &Path,
        spec: &CommandSpec,
        listeners: &mut [&mut dyn LineListener],
    ) -> crate::core::error::Result<CommandResult> {
        self.log.push(format!("run: {}", spec.printable()));
        self.specs.borrow_mut().push(spec.clone());

        let result = self
            .scripted
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| CommandResult::ok(vec![], vec![]));

        for line in &result.output {
            for listener in listeners.iter_mut() {
                listener.on_line(line, OutputSource::Stdout);
            }
        }
        for line in &result.error_output {
            for listener in listeners.iter_mut() {
                listener.on_line(line, OutputSource::Stderr);
            }
        }
        Ok(result)
    }
}

/// Notifier double writing into the shared event log
pub struct RecordingNotifier {
    log: EventLog,
}

impl RecordingNotifier {
    pub fn new(log: EventLog) -> Self {
        RecordingNotifier { log }
    }
}

impl Notifier for RecordingNotifier {
    fn command(&self, line: &str) {
        self.log.push(format!("notify-command: {line}"));
    }

    fn success(&self, title: &str, message: &str) {
        self.log.push(format!("notify-success: {title}: {message}"));
    }

    fn error(&self, title: &str, message: &str) {
        self.log.push(format!("notify-error: {title}: {message}"));
    }

    fn link(&self, address: &str) {
        self.log.push(format!("notify-link: {address}"));
    }

    fn progress(&self, label: &str) {
        self.log.push(format!("notify-progress: {label}"));
    }
}

/// Refresh double counting broadcast invocations
#[derive(Default)]
pub struct CountingRefresh {
    count: Cell<usize>,
}

impl CountingRefresh {
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl RepoRefresh for CountingRefresh {
    fn repository_changed(&self, _repo: &Repo) {
        self.count.set(self.count.get() + 1);
    }
}

/// Temporary repository with one commit and an `origin` remote configured.
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_repo() -> (TempDir, Repo) {
    let (dir, repo) = temp_repo_without_remote();
    repo.inner()
        .remote("origin", "https://example.com/repo.git")
        .unwrap();
    (dir, repo)
}

/// Same as [`temp_repo`] but with zero remotes, for fail-fast tests
pub fn temp_repo_without_remote() -> (TempDir, Repo) {
    let dir = TempDir::new().unwrap();
    let git_repo = git2::Repository::init(dir.path()).unwrap();

    let signature = git2::Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = {
        let mut index = git_repo.index().unwrap();
        index.write_tree().unwrap()
    };
    let tree = git_repo.find_tree(tree_id).unwrap();
    git_repo
        .commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
        .unwrap();
    drop(tree);
    drop(git_repo);

    let repo = Repo::discover(dir.path()).unwrap();
    (dir, repo)
}
