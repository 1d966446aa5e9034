use super::*;
use crate::models::{Entry, EntryBody};
use chrono::Utc;

fn file(id: i64, path: &str) -> Entry {
    let now = Utc::now();
    Entry {
        id,
        project_id: 1,
        name: path.rsplit('/').next().unwrap_or("").to_string(),
        path: path.to_string(),
        body: EntryBody::File {
            content: format!("content of {path}"),
            language: None,
        },
        created_at: now,
        updated_at: now,
    }
}

fn directory(id: i64, path: &str) -> Entry {
    Entry {
        body: EntryBody::Directory,
        ..file(id, path)
    }
}

#[test]
fn open_file_appends_and_focuses() {
    let mut session = WorkspaceSession::new();
    let a = file(1, "/a.js");
    let b = file(2, "/b.js");

    assert!(session.open_file(&a));
    assert!(session.open_file(&b));
    assert_eq!(session.active_id(), Some(2));
    let ids: Vec<i64> = session.open_entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn reopening_changes_focus_but_never_tab_order() {
    let mut session = WorkspaceSession::new();
    let a = file(1, "/a.js");
    let b = file(2, "/b.js");
    session.open_file(&a);
    session.open_file(&b);

    assert!(session.open_file(&a));
    assert_eq!(session.active_id(), Some(1));
    let ids: Vec<i64> = session.open_entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);

    // 已是活动条目时再次打开什么也不变。
    assert!(!session.open_file(&a));
}

#[test]
fn directories_are_silently_ignored() {
    let mut session = WorkspaceSession::new();
    assert!(!session.open_file(&directory(1, "/src")));
    assert!(session.open_entries().is_empty());
    assert_eq!(session.active_id(), None);
}

#[test]
fn closing_active_tab_activates_last_remaining() {
    let mut session = WorkspaceSession::new();
    session.open_file(&file(1, "/a.js"));
    session.open_file(&file(2, "/b.js"));
    session.open_file(&file(3, "/c.js"));
    // active = B（中间那个）
    session.open_file(&file(2, "/b.js"));

    assert!(session.close_file(2));
    // 最后加入且仍在的那个是 C，不是邻居 A。
    assert_eq!(session.active_id(), Some(3));
}

#[test]
fn closing_inactive_tab_keeps_active() {
    let mut session = WorkspaceSession::new();
    session.open_file(&file(1, "/a.js"));
    session.open_file(&file(2, "/b.js"));

    assert!(session.close_file(1));
    assert_eq!(session.active_id(), Some(2));
}

#[test]
fn closing_last_tab_leaves_no_active() {
    let mut session = WorkspaceSession::new();
    session.open_file(&file(1, "/a.js"));
    assert!(session.close_file(1));
    assert_eq!(session.active_id(), None);
    assert!(session.open_entries().is_empty());
    assert!(!session.close_file(1));
}

#[test]
fn update_content_rewrites_cached_copy() {
    let mut session = WorkspaceSession::new();
    session.open_file(&file(1, "/a.js"));

    assert!(session.update_content(1, "updated"));
    assert_eq!(session.active_entry().unwrap().content(), Some("updated"));

    // 未打开的 id：本地无缓存可改。
    assert!(!session.update_content(99, "x"));
}

#[test]
fn cursor_replaces_and_clamps_to_one() {
    let mut session = WorkspaceSession::new();
    assert_eq!(session.cursor(), Cursor { line: 1, column: 1 });
    assert!(session.set_cursor(10, 4));
    assert_eq!(session.cursor(), Cursor { line: 10, column: 4 });
    assert!(session.set_cursor(0, 0));
    assert_eq!(session.cursor(), Cursor { line: 1, column: 1 });
    assert!(!session.set_cursor(1, 1));
}

#[test]
fn entries_loaded_opens_first_file_skipping_directories() {
    let mut session = WorkspaceSession::new();
    let entries = vec![directory(1, "/src"), file(2, "/src/a.js"), file(3, "/b.js")];
    assert!(session.entries_loaded(&entries));
    assert_eq!(session.active_id(), Some(2));

    // 已有活动条目时不再自动打开。
    assert!(!session.entries_loaded(&entries));
}

#[test]
fn entries_loaded_with_only_directories_stays_empty() {
    let mut session = WorkspaceSession::new();
    assert!(!session.entries_loaded(&[directory(1, "/src")]));
    assert_eq!(session.active_id(), None);
}
