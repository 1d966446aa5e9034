//! 命令执行 adapter
//!
//! 命令串按空白切成程序 + 参数，经 tokio 子进程执行并捕获输出。
//! 沙箱/安全由外部环境保证，此处不做限制。

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use super::ports::{ExecOutcome, ExecTransportError, ProcessRunner};

#[derive(Debug, Clone)]
pub struct ShellRunner {
    default_cwd: PathBuf,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            default_cwd: std::env::temp_dir(),
        }
    }

    pub fn with_cwd(default_cwd: PathBuf) -> Self {
        Self { default_cwd }
    }
}

#[async_trait]
impl ProcessRunner for ShellRunner {
    async fn run(
        &self,
        command: &str,
        cwd: Option<&str>,
    ) -> Result<ExecOutcome, ExecTransportError> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| ExecTransportError("empty command".to_string()))?;

        let cwd = cwd
            .map(PathBuf::from)
            .unwrap_or_else(|| self.default_cwd.clone());

        let output = Command::new(program)
            .args(parts)
            .current_dir(cwd)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| ExecTransportError(format!("failed to launch {program:?}: {err}")))?;

        Ok(ExecOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            // 被信号终止时没有退出码，按 -1（非零）上报。
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
