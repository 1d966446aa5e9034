//! 效果宿主：把内核产出的 Effect 落到 ports 上执行
//!
//! 所有效果从调用方视角都是 fire-and-forget：跑到成功或失败为止，
//! 没有取消原语；结果以后续 Action 的形式回流（成功的持久化无回流）。

use std::sync::Arc;

use crate::kernel::{Action, Effect};
use crate::models::EntryPatch;

use super::ports::{EntryStore, ProcessRunner};

pub struct EffectHost {
    store: Arc<dyn EntryStore>,
    runner: Arc<dyn ProcessRunner>,
}

impl EffectHost {
    pub fn new(store: Arc<dyn EntryStore>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { store, runner }
    }

    pub async fn perform(&self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::PersistContent { id, content } => {
                match self.store.update_entry(id, EntryPatch::content(content)).await {
                    Ok(_) => None,
                    Err(err) => Some(Action::PersistFailed {
                        id,
                        message: err.to_string(),
                    }),
                }
            }
            Effect::RunCommand { command } => match self.runner.run(&command, None).await {
                Ok(outcome) => Some(Action::CommandFinished(outcome)),
                Err(err) => Some(Action::CommandFailed {
                    message: err.to_string(),
                }),
            },
        }
    }
}
