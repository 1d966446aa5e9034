use crate::models::Entry;
use crate::services::ports::ExecOutcome;

use super::layout::Panel;

#[derive(Debug, Clone)]
pub enum Action {
    /// 项目条目列表就绪（触发初始选择）。
    EntriesLoaded { entries: Vec<Entry> },
    OpenFile(Entry),
    CloseFile { id: i64 },
    /// 乐观内容更新，随后发出持久化效果。
    UpdateContent { id: i64, content: String },
    /// 持久化失败：本地乐观状态保留，记一条通知。
    PersistFailed { id: i64, message: String },
    SetCursor { line: u32, column: u32 },

    ConsoleSetInput(String),
    ConsoleSubmit,
    ConsoleRecallOlder,
    ConsoleRecallNewer,
    ConsoleClear,
    CommandFinished(ExecOutcome),
    /// 执行器无法启动。
    CommandFailed { message: String },

    Resize { panel: Panel, delta: i32 },
}
