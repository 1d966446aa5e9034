//! Service ports: traits + data contracts.
//!
//! 核心只依赖这里的契约；具体后端（内存存储、进程执行、
//! 文本生成）在兄弟模块中作为 adapter 实现。

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryPatch, NewEntry, NewProject, Project};

#[derive(Debug)]
pub enum StoreError {
    /// 引用的项目或条目不存在。
    NotFound,
    /// 同一项目内 path 重复。
    Conflict(String),
    /// 存储后端失败。
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "not found"),
            StoreError::Conflict(msg) => write!(f, "conflict: {msg}"),
            StoreError::Backend(msg) => write!(f, "storage failure: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Project 与 Entry 的持久化 CRUD，按代理整数 id 与 (project_id, path) 寻址。
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;
    async fn get_project(&self, id: i64) -> StoreResult<Project>;
    async fn create_project(&self, new: NewProject) -> StoreResult<Project>;
    /// 级联删除该项目的全部条目。
    async fn delete_project(&self, id: i64) -> StoreResult<()>;

    async fn list_entries(&self, project_id: i64) -> StoreResult<Vec<Entry>>;
    async fn get_entry(&self, id: i64) -> StoreResult<Entry>;
    async fn get_entry_by_path(&self, project_id: i64, path: &str) -> StoreResult<Entry>;
    async fn create_entry(&self, new: NewEntry) -> StoreResult<Entry>;
    async fn update_entry(&self, id: i64, patch: EntryPatch) -> StoreResult<Entry>;
    async fn delete_entry(&self, id: i64) -> StoreResult<()>;
}

/// 一次命令执行的捕获结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// 执行器本身无法启动（传输失败），区别于命令的非零退出。
#[derive(Debug)]
pub struct ExecTransportError(pub String);

impl fmt::Display for ExecTransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ExecTransportError {}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &str, cwd: Option<&str>)
        -> Result<ExecOutcome, ExecTransportError>;
}

#[derive(Debug)]
pub enum AssistError {
    /// 生成服务调用失败。
    Service(String),
    /// 服务返回了无法解析的数据。
    Malformed(String),
}

impl fmt::Display for AssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistError::Service(msg) => write!(f, "generation service error: {msg}"),
            AssistError::Malformed(msg) => write!(f, "malformed generation response: {msg}"),
        }
    }
}

impl std::error::Error for AssistError {}

/// 无状态文本生成：补全 / 解释 / 修复 / 文档。
#[async_trait]
pub trait CodeAssistant: Send + Sync {
    async fn complete(
        &self,
        code: &str,
        language: &str,
        max_tokens: Option<u32>,
    ) -> Result<String, AssistError>;
    async fn explain(&self, code: &str, language: &str) -> Result<String, AssistError>;
    async fn document(&self, code: &str, language: &str) -> Result<String, AssistError>;
    /// 修复失败解析时返回原始代码，而不是让调用方失败。
    async fn fix(&self, code: &str, error: &str, language: &str) -> Result<String, AssistError>;
}
