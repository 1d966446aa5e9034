//! 控制台会话：滚动回放、命令历史与召回游标
//!
//! 单线程交互式行控制台。三种互斥的行类型（Command/Output/Error），
//! 同一时刻最多一条命令在途；`clear`/`cls` 只清空滚动回放，
//! 从不清空命令历史。

use crate::services::ports::ExecOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLine {
    pub kind: LineKind,
    pub text: String,
}

/// submit 的三种结果：拒绝（空白或在途）、本地清屏、派发给执行器。
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Rejected,
    Cleared,
    Dispatched { command: String },
}

#[derive(Debug)]
pub struct ConsoleSession {
    scrollback: Vec<ConsoleLine>,
    /// 最新在尾部，连续重复不记录（非连续的保留）。
    history: Vec<String>,
    /// -1 表示未在浏览历史。
    history_cursor: isize,
    input: String,
    in_flight: bool,
    /// 滚动回放每次增长/清空都会递增，供视图自动跟随最新行。
    revision: u64,
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSession {
    pub fn new() -> Self {
        Self {
            scrollback: Vec::new(),
            history: Vec::new(),
            history_cursor: -1,
            input: String::new(),
            in_flight: false,
            revision: 0,
        }
    }

    pub fn scrollback(&self) -> &[ConsoleLine] {
        &self.scrollback
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> isize {
        self.history_cursor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_input(&mut self, text: String) -> bool {
        if self.input == text {
            return false;
        }
        self.input = text;
        true
    }

    fn push_line(&mut self, kind: LineKind, text: impl Into<String>) {
        self.scrollback.push(ConsoleLine {
            kind,
            text: text.into(),
        });
        self.revision = self.revision.wrapping_add(1);
    }

    /// 提交当前输入。空白输入或已有命令在途时拒绝。
    /// `clear`/`cls` 只清屏：不调用执行器，不记入历史。
    /// 其余命令先追加 Command 行（在执行完成之前），再派发。
    pub fn submit(&mut self) -> Submission {
        if self.input.trim().is_empty() || self.in_flight {
            return Submission::Rejected;
        }
        let raw = std::mem::take(&mut self.input);
        self.history_cursor = -1;

        let trimmed = raw.trim();
        if trimmed == "clear" || trimmed == "cls" {
            self.clear();
            return Submission::Cleared;
        }

        self.push_line(LineKind::Command, raw.clone());
        if self.history.last().map(String::as_str) != Some(raw.as_str()) {
            self.history.push(raw.clone());
        }
        self.in_flight = true;
        Submission::Dispatched { command: raw }
    }

    /// 三个追加相互独立：非空 stdout、非空 stderr、非零退出码。
    pub fn apply_outcome(&mut self, outcome: &ExecOutcome) {
        if !outcome.stdout.is_empty() {
            self.push_line(LineKind::Output, outcome.stdout.clone());
        }
        if !outcome.stderr.is_empty() {
            self.push_line(LineKind::Error, outcome.stderr.clone());
        }
        if outcome.exit_code != 0 {
            self.push_line(
                LineKind::Error,
                format!("Process exited with code {}", outcome.exit_code),
            );
        }
        self.in_flight = false;
    }

    /// 执行器无法启动：单独一条 Error 行，别无其他。
    pub fn apply_transport_error(&mut self, message: &str) {
        self.push_line(LineKind::Error, message.to_string());
        self.in_flight = false;
    }

    /// 只清空滚动回放，命令历史保留。
    pub fn clear(&mut self) {
        self.scrollback.clear();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Arrow-Up：从最新向最旧走；最旧处再按无效果。
    pub fn recall_older(&mut self) -> bool {
        let len = self.history.len() as isize;
        if self.history_cursor + 1 >= len {
            return false;
        }
        self.history_cursor += 1;
        let idx = (len - 1 - self.history_cursor) as usize;
        self.input = self.history[idx].clone();
        true
    }

    /// Arrow-Down：向最新走；越过最新时回到空输入、游标 -1。
    pub fn recall_newer(&mut self) -> bool {
        if self.history_cursor > 0 {
            self.history_cursor -= 1;
            let idx = (self.history.len() as isize - 1 - self.history_cursor) as usize;
            self.input = self.history[idx].clone();
            true
        } else if self.history_cursor == 0 {
            self.history_cursor = -1;
            self.input.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/console.rs"]
mod tests;
