//! webcode - 浏览器编码工作区引擎
//!
//! 模块结构：
//! - models: 数据模型（Project, Entry, PathTree）
//! - kernel: 无头状态核心（WorkspaceSession, ConsoleSession, Layout, Store）
//! - services: 服务层（ports + adapters：存储、命令执行、代码助手）
//! - server: HTTP 接口（axum）

pub mod config;
pub mod kernel;
pub mod logging;
pub mod models;
pub mod server;
pub mod services;
