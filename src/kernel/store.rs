//! Store：把 Action 归约到 AppState，并产出待执行的 Effect

use super::console::{ConsoleSession, Submission};
use super::layout::LayoutState;
use super::workspace::WorkspaceSession;
use super::{Action, Effect};

/// 面向用户表面的通知（toast 一类），由调用方排空。
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// 存储写入失败，本地乐观内容有意保留（接受的分歧，见 DESIGN.md）。
    SaveFailed { id: i64, message: String },
}

#[derive(Debug, Default)]
pub struct AppState {
    pub workspace: WorkspaceSession,
    pub console: ConsoleSession,
    pub layout: LayoutState,
    notices: Vec<Notice>,
}

impl AppState {
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::EntriesLoaded { entries } => {
                DispatchResult::changed(self.state.workspace.entries_loaded(&entries))
            }
            Action::OpenFile(entry) => {
                DispatchResult::changed(self.state.workspace.open_file(&entry))
            }
            Action::CloseFile { id } => {
                DispatchResult::changed(self.state.workspace.close_file(id))
            }
            Action::UpdateContent { id, content } => {
                // 本地先行改写；持久化效果无条件发出（last write wins）。
                let state_changed = self.state.workspace.update_content(id, &content);
                DispatchResult {
                    effects: vec![Effect::PersistContent { id, content }],
                    state_changed,
                }
            }
            Action::PersistFailed { id, message } => {
                self.state.notices.push(Notice::SaveFailed { id, message });
                DispatchResult::changed(true)
            }
            Action::SetCursor { line, column } => {
                DispatchResult::changed(self.state.workspace.set_cursor(line, column))
            }

            Action::ConsoleSetInput(text) => {
                DispatchResult::changed(self.state.console.set_input(text))
            }
            Action::ConsoleSubmit => match self.state.console.submit() {
                Submission::Rejected => DispatchResult::changed(false),
                Submission::Cleared => DispatchResult::changed(true),
                Submission::Dispatched { command } => DispatchResult {
                    effects: vec![Effect::RunCommand { command }],
                    state_changed: true,
                },
            },
            Action::ConsoleRecallOlder => {
                DispatchResult::changed(self.state.console.recall_older())
            }
            Action::ConsoleRecallNewer => {
                DispatchResult::changed(self.state.console.recall_newer())
            }
            Action::ConsoleClear => {
                self.state.console.clear();
                DispatchResult::changed(true)
            }
            Action::CommandFinished(outcome) => {
                self.state.console.apply_outcome(&outcome);
                DispatchResult::changed(true)
            }
            Action::CommandFailed { message } => {
                self.state.console.apply_transport_error(&message);
                DispatchResult::changed(true)
            }

            Action::Resize { panel, delta } => {
                DispatchResult::changed(self.state.layout.resize(panel, delta))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
