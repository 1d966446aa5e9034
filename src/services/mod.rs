//! Services layer (ports + adapters).
//!
//! - `ports`: 内核与 server 依赖的纯契约。
//! - adapters: `memory`（存储）、`process`（命令执行）、`assist`（代码助手）。
//! - `host`: 把内核 Effect 落到 ports 上执行。

pub mod assist;
pub mod host;
pub mod memory;
pub mod ports;
pub mod process;

pub use assist::OpenAiAssistant;
pub use host::EffectHost;
pub use memory::MemStore;
pub use ports::{
    AssistError, CodeAssistant, EntryStore, ExecOutcome, ExecTransportError, ProcessRunner,
    StoreError, StoreResult,
};
pub use process::ShellRunner;
