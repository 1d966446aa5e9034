#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// 把某条目的最新内容写回存储；每次更新独立发出，不合并不去抖。
    PersistContent { id: i64, content: String },
    /// 派发一条 shell 命令给执行器。
    RunCommand { command: String },
}
