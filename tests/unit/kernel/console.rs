use super::*;
use crate::services::ports::ExecOutcome;

fn outcome(stdout: &str, stderr: &str, exit_code: i32) -> ExecOutcome {
    ExecOutcome {
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
        exit_code,
    }
}

fn submit(session: &mut ConsoleSession, text: &str) -> Submission {
    session.set_input(text.to_string());
    session.submit()
}

#[test]
fn submit_appends_command_line_before_execution() {
    let mut session = ConsoleSession::new();
    let result = submit(&mut session, "ls -la");
    assert_eq!(
        result,
        Submission::Dispatched {
            command: "ls -la".to_string()
        }
    );
    assert_eq!(session.scrollback().len(), 1);
    assert_eq!(session.scrollback()[0].kind, LineKind::Command);
    assert_eq!(session.scrollback()[0].text, "ls -la");
    assert!(session.in_flight());
    assert!(session.input().is_empty());
}

#[test]
fn blank_input_is_rejected() {
    let mut session = ConsoleSession::new();
    assert_eq!(submit(&mut session, "   "), Submission::Rejected);
    assert!(session.scrollback().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn second_submit_rejected_while_in_flight() {
    let mut session = ConsoleSession::new();
    submit(&mut session, "sleep 5");
    assert_eq!(submit(&mut session, "echo hi"), Submission::Rejected);
    assert_eq!(session.scrollback().len(), 1);

    session.apply_outcome(&outcome("", "", 0));
    assert!(!session.in_flight());
    assert!(matches!(
        submit(&mut session, "echo hi"),
        Submission::Dispatched { .. }
    ));
}

#[test]
fn clear_and_cls_empty_scrollback_but_not_history() {
    let mut session = ConsoleSession::new();
    submit(&mut session, "echo one");
    session.apply_outcome(&outcome("one\n", "", 0));
    let history_len = session.history().len();

    assert_eq!(submit(&mut session, "clear"), Submission::Cleared);
    assert!(session.scrollback().is_empty());
    assert_eq!(session.history().len(), history_len);
    assert!(!session.in_flight());

    submit(&mut session, "echo two");
    session.apply_outcome(&outcome("two\n", "", 0));
    assert_eq!(submit(&mut session, "cls"), Submission::Cleared);
    assert!(session.scrollback().is_empty());
}

#[test]
fn outcome_lines_fire_independently() {
    let mut session = ConsoleSession::new();
    submit(&mut session, "make");
    session.apply_outcome(&outcome("built\n", "warning\n", 2));

    let kinds: Vec<LineKind> = session.scrollback().iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Command,
            LineKind::Output,
            LineKind::Error,
            LineKind::Error
        ]
    );
    assert_eq!(
        session.scrollback().last().unwrap().text,
        "Process exited with code 2"
    );
}

#[test]
fn silent_success_appends_nothing_beyond_command_line() {
    let mut session = ConsoleSession::new();
    submit(&mut session, "true");
    session.apply_outcome(&outcome("", "", 0));
    assert_eq!(session.scrollback().len(), 1);
    assert_eq!(session.scrollback()[0].kind, LineKind::Command);
}

#[test]
fn transport_failure_appends_single_error_line() {
    let mut session = ConsoleSession::new();
    submit(&mut session, "nosuchbinary");
    session.apply_transport_error("failed to launch \"nosuchbinary\"");

    assert_eq!(session.scrollback().len(), 2);
    assert_eq!(session.scrollback()[1].kind, LineKind::Error);
    assert!(!session.in_flight());
}

#[test]
fn consecutive_duplicates_suppressed_in_history() {
    let mut session = ConsoleSession::new();
    submit(&mut session, "ls");
    session.apply_outcome(&outcome("", "", 0));
    submit(&mut session, "ls");
    session.apply_outcome(&outcome("", "", 0));
    assert_eq!(session.history(), ["ls"]);

    submit(&mut session, "pwd");
    session.apply_outcome(&outcome("", "", 0));
    submit(&mut session, "ls");
    session.apply_outcome(&outcome("", "", 0));
    // 非连续的重复保留。
    assert_eq!(session.history(), ["ls", "pwd", "ls"]);
}

#[test]
fn recall_walks_most_recent_to_oldest_and_back() {
    let mut session = ConsoleSession::new();
    for cmd in ["a", "b", "c"] {
        submit(&mut session, cmd);
        session.apply_outcome(&outcome("", "", 0));
    }
    assert_eq!(session.history_cursor(), -1);

    assert!(session.recall_older());
    assert_eq!(session.input(), "c");
    assert_eq!(session.history_cursor(), 0);

    assert!(session.recall_older());
    assert_eq!(session.input(), "b");
    assert_eq!(session.history_cursor(), 1);

    assert!(session.recall_newer());
    assert_eq!(session.input(), "c");
    assert_eq!(session.history_cursor(), 0);

    assert!(session.recall_newer());
    assert_eq!(session.input(), "");
    assert_eq!(session.history_cursor(), -1);

    assert!(!session.recall_newer());
}

#[test]
fn recall_older_stops_at_oldest() {
    let mut session = ConsoleSession::new();
    for cmd in ["a", "b"] {
        submit(&mut session, cmd);
        session.apply_outcome(&outcome("", "", 0));
    }
    assert!(session.recall_older());
    assert!(session.recall_older());
    assert_eq!(session.input(), "a");
    assert!(!session.recall_older());
    assert_eq!(session.input(), "a");
    assert_eq!(session.history_cursor(), 1);
}

#[test]
fn recall_with_empty_history_is_noop() {
    let mut session = ConsoleSession::new();
    assert!(!session.recall_older());
    assert!(!session.recall_newer());
    assert_eq!(session.history_cursor(), -1);
}

#[test]
fn submit_resets_history_cursor() {
    let mut session = ConsoleSession::new();
    submit(&mut session, "a");
    session.apply_outcome(&outcome("", "", 0));
    session.recall_older();
    assert_eq!(session.history_cursor(), 0);

    submit(&mut session, "b");
    assert_eq!(session.history_cursor(), -1);
}

#[test]
fn revision_grows_with_scrollback() {
    let mut session = ConsoleSession::new();
    let initial = session.revision();
    submit(&mut session, "echo hi");
    assert!(session.revision() > initial);

    let before_clear = session.revision();
    session.clear();
    // 清空也是视图需要跟随的一次变化。
    assert!(session.revision() > before_clear);
}
