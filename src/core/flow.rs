//! The merge-request workflow.
//!
//! Composes catalog operations into one user-facing action: position the
//! working copy on the configured test branch, merge the feature branch into
//! it, classify the outcome for presentation, surface a generated review link
//! when the server's output carries one, and broadcast a repository-state
//! refresh. No state persists across invocations; operations run strictly
//! sequentially; a failed merge is left exactly as git left it (possibly
//! conflicted); there is no auto-abort.
//!
//! # Public API
//! - [`merge_request`]: The workflow entry point
//! - [`MergeRequestOptions`]: Caller-supplied listener attachments
//! - [`MergeRequestOutcome`]: Terminal classification

use crate::core::error::Result;
use crate::core::executor::{GitExecutor, LineListener};
use crate::core::git::GitOps;
use crate::core::output_scan::extract_review_link;
use crate::core::refresh::RepoRefresh;
use crate::core::repo::Repo;

/// Visual separator opening each workflow run in the notification channel
const WORKFLOW_SEPARATOR: &str =
    "===================================================================================";

/// User-supplied parameters for a merge-request invocation, passed through
/// unchanged to the underlying merge operation.
#[derive(Default)]
pub struct MergeRequestOptions<'a> {
    /// Listeners attached to the merge, invoked once per output line
    pub merge_listeners: Vec<&'a mut dyn LineListener>,
}

/// Terminal state of one merge-request invocation. No retry in either case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeRequestOutcome {
    Succeeded { review_link: Option<String> },
    Failed { error: String },
}

/// Run the merge-request workflow: merge the currently checked-out branch
/// into the configured test branch.
///
/// The refresh broadcast runs exactly once after classification, success or
/// failure alike, since the working copy may have changed regardless of logical
/// outcome.
pub fn merge_request<E: GitExecutor>(
    ops: &GitOps<E>,
    repo: &Repo,
    mut options: MergeRequestOptions<'_>,
    refresh: &dyn RepoRefresh,
) -> Result<MergeRequestOutcome> {
    ops.notifier().command(WORKFLOW_SEPARATOR);

    let current_branch = repo.current_branch()?;
    let target_branch = ops.config().test_branch.clone();

    let outcome = run_merge(ops, repo, &current_branch, &target_branch, &mut options);
    refresh.repository_changed(repo);
    outcome
}

fn run_merge<E: GitExecutor>(
    ops: &GitOps<E>,
    repo: &Repo,
    current_branch: &str,
    target_branch: &str,
    options: &mut MergeRequestOptions<'_>,
) -> Result<MergeRequestOutcome> {
    // Position the working copy on the target before merging; the contract is
    // always "merge the feature branch INTO the test branch".
    let checkout = ops.checkout(repo, target_branch)?;
    if !checkout.success {
        let error = checkout.error_output_as_joined_string();
        ops.notifier().error("Merge Request", &error);
        return Ok(MergeRequestOutcome::Failed { error });
    }

    let result = ops.merge(repo, current_branch, options.merge_listeners.as_mut_slice())?;
    if !result.success {
        let error = result.error_output_as_joined_string();
        ops.notifier().error("Merge Request", &error);
        return Ok(MergeRequestOutcome::Failed { error });
    }

    // Some servers emit informational text on stderr even on success; report
    // it as part of the success notification, never as a failure.
    ops.notifier()
        .success("Merge Request", &result.error_output_as_joined_string());

    let review_link = extract_review_link(&result);
    if let Some(address) = &review_link {
        ops.notifier().link(address);
    }
    Ok(MergeRequestOutcome::Succeeded { review_link })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::CommandResult;
    use crate::core::config::FlowConfig;
    use crate::core::executor::OutputSource;
    use crate::core::testing::{temp_repo, CountingRefresh, EventLog, FakeGit, RecordingNotifier};

    fn ops_with(log: &EventLog) -> GitOps<FakeGit> {
        GitOps::new(
            FakeGit::new(log.clone()),
            Box::new(RecordingNotifier::new(log.clone())),
            FlowConfig::default(),
        )
    }

    fn scripted_ops(log: &EventLog, merge_result: CommandResult) -> GitOps<FakeGit> {
        let ops = ops_with(log);
        // First the target checkout, then the merge itself
        ops.executor.script(CommandResult::ok(vec![], vec![]));
        ops.executor.script(merge_result);
        ops
    }

    #[test]
    fn test_successful_merge_with_link_reports_succeeded() {
        let (_dir, repo) = temp_repo();
        let log = EventLog::default();
        let ops = scripted_ops(
            &log,
            CommandResult::ok(
                vec![],
                vec![
                    "l1".into(),
                    "l2".into(),
                    "author   https://review.example/mr/42".into(),
                    "l4".into(),
                ],
            ),
        );
        let refresh = CountingRefresh::default();

        let outcome =
            merge_request(&ops, &repo, MergeRequestOptions::default(), &refresh).unwrap();

        assert_eq!(
            outcome,
            MergeRequestOutcome::Succeeded {
                review_link: Some("https://review.example/mr/42".to_string())
            }
        );
        assert_eq!(refresh.count(), 1);
        let events = log.snapshot();
        assert!(events
            .iter()
            .any(|e| e == "notify-link: https://review.example/mr/42"));
    }

    #[test]
    fn test_success_without_link_suppresses_link_notification() {
        let (_dir, repo) = temp_repo();
        let log = EventLog::default();
        let ops = scripted_ops(&log, CommandResult::ok(vec![], vec!["merged".into()]));
        let refresh = CountingRefresh::default();

        let outcome =
            merge_request(&ops, &repo, MergeRequestOptions::default(), &refresh).unwrap();

        assert_eq!(
            outcome,
            MergeRequestOutcome::Succeeded { review_link: None }
        );
        assert!(!log.snapshot().iter().any(|e| e.starts_with("notify-link:")));
    }

    #[test]
    fn test_failed_merge_reports_error_and_still_refreshes_once() {
        let (_dir, repo) = temp_repo();
        let log = EventLog::default();
        let ops = scripted_ops(
            &log,
            CommandResult::failed(vec!["CONFLICT (content): merge conflict".into()]),
        );
        let refresh = CountingRefresh::default();

        let outcome =
            merge_request(&ops, &repo, MergeRequestOptions::default(), &refresh).unwrap();

        assert_eq!(
            outcome,
            MergeRequestOutcome::Failed {
                error: "CONFLICT (content): merge conflict".to_string()
            }
        );
        assert_eq!(refresh.count(), 1);
        let events = log.snapshot();
        assert!(events
            .iter()
            .any(|e| e.contains("notify-error: Merge Request: CONFLICT")));
    }

    #[test]
    fn test_checkout_failure_terminates_before_merge() {
        let (_dir, repo) = temp_repo();
        let log = EventLog::default();
        let ops = ops_with(&log);
        ops.executor
            .script(CommandResult::failed(vec!["pathspec 'test' not found".into()]));
        let refresh = CountingRefresh::default();

        let outcome =
            merge_request(&ops, &repo, MergeRequestOptions::default(), &refresh).unwrap();

        assert!(matches!(outcome, MergeRequestOutcome::Failed { .. }));
        // Only the checkout ran; no merge was attempted
        assert_eq!(ops.executor.specs().len(), 1);
        assert_eq!(refresh.count(), 1);
    }

    #[test]
    fn test_merge_targets_configured_test_branch() {
        let (_dir, repo) = temp_repo();
        let current = repo.current_branch().unwrap();
        let log = EventLog::default();
        let ops = ops_with(&log);
        let refresh = CountingRefresh::default();

        merge_request(&ops, &repo, MergeRequestOptions::default(), &refresh).unwrap();

        let specs = ops.executor.specs();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].params(), ["test", "--force"]);
        assert_eq!(specs[1].params(), [current.as_str()]);
    }

    #[test]
    fn test_merge_listeners_receive_lines_in_order() {
        struct Collector(Vec<String>);
        impl LineListener for Collector {
            fn on_line(&mut self, line: &str, _source: OutputSource) {
                self.0.push(line.to_string());
            }
        }

        let (_dir, repo) = temp_repo();
        let log = EventLog::default();
        let ops = scripted_ops(
            &log,
            CommandResult::ok(vec!["Updating abc..def".into()], vec!["info".into()]),
        );
        let refresh = CountingRefresh::default();
        let mut collector = Collector(Vec::new());

        let options = MergeRequestOptions {
            merge_listeners: vec![&mut collector],
        };
        merge_request(&ops, &repo, options, &refresh).unwrap();

        assert_eq!(collector.0, ["Updating abc..def", "info"]);
    }
}
