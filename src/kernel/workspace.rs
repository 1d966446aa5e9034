//! 工作区会话：打开的条目、活动条目与光标
//!
//! 会话持有 Entry 内容的本地缓存副本；持久化记录归存储所有，
//! 每次内容变更先本地改写（乐观更新）再交由上层发出持久化效果。

use crate::models::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: u32,
    pub column: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

#[derive(Debug, Default)]
pub struct WorkspaceSession {
    /// 插入序，按 id 去重。
    open_entries: Vec<Entry>,
    /// 必须是 open_entries 的成员（或 None）。
    active: Option<i64>,
    cursor: Cursor,
}

impl WorkspaceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_entries(&self) -> &[Entry] {
        &self.open_entries
    }

    pub fn active_id(&self) -> Option<i64> {
        self.active
    }

    pub fn active_entry(&self) -> Option<&Entry> {
        let id = self.active?;
        self.open_entries.iter().find(|e| e.id == id)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_open(&self, id: i64) -> bool {
        self.open_entries.iter().any(|e| e.id == id)
    }

    /// 目录静默忽略。已打开的条目只改焦点，不改 tab 顺序。
    pub fn open_file(&mut self, entry: &Entry) -> bool {
        if !entry.is_file() {
            return false;
        }
        let mut changed = false;
        if !self.is_open(entry.id) {
            self.open_entries.push(entry.clone());
            changed = true;
        }
        if self.active != Some(entry.id) {
            self.active = Some(entry.id);
            changed = true;
        }
        changed
    }

    /// 关闭活动条目时，新活动条目是剩余里最后加入的那个
    /// （most-recent-remaining，而不是位置上最近的邻居）。
    pub fn close_file(&mut self, id: i64) -> bool {
        let before = self.open_entries.len();
        self.open_entries.retain(|e| e.id != id);
        let removed = self.open_entries.len() != before;
        if removed && self.active == Some(id) {
            self.active = self.open_entries.last().map(|e| e.id);
        }
        removed
    }

    /// 乐观更新：立即改写本地缓存，持久化由调用方随后发出。
    /// 返回是否有本地缓存被改写。
    pub fn update_content(&mut self, id: i64, content: &str) -> bool {
        let mut changed = false;
        for entry in self.open_entries.iter_mut().filter(|e| e.id == id) {
            changed |= entry.set_content(content.to_string());
        }
        changed
    }

    pub fn set_cursor(&mut self, line: u32, column: u32) -> bool {
        let next = Cursor {
            line: line.max(1),
            column: column.max(1),
        };
        if next == self.cursor {
            return false;
        }
        self.cursor = next;
        true
    }

    /// 条目列表首次就绪时的初始选择：按存储顺序打开第一个文件，
    /// 跳过目录；没有文件则保持无活动条目。
    pub fn entries_loaded(&mut self, entries: &[Entry]) -> bool {
        if self.active.is_some() {
            return false;
        }
        match entries.iter().find(|e| e.is_file()) {
            Some(first) => self.open_file(first),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
