use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use webcode::config::ServerConfig;
use webcode::server::{router, AppContext};
use webcode::services::ports::CodeAssistant;
use webcode::services::{MemStore, OpenAiAssistant, ShellRunner};

#[tokio::main]
async fn main() -> Result<()> {
    let _logging = webcode::logging::init();
    let config = ServerConfig::from_env();

    let store = Arc::new(MemStore::new());
    if config.seed_demo {
        if let Some(project_id) = store.seed_demo().await.map_err(anyhow::Error::from)? {
            info!(project_id, "seeded demo project");
        }
    }

    let assistant: Option<Arc<dyn CodeAssistant>> = match config.openai_api_key {
        Some(key) => {
            let client = match config.openai_model {
                Some(model) => OpenAiAssistant::with_model(key, model),
                None => OpenAiAssistant::new(key),
            };
            Some(Arc::new(client))
        }
        None => {
            warn!("OPENAI_API_KEY not set, /api/ai endpoints disabled");
            None
        }
    };

    let ctx = AppContext {
        store,
        runner: Arc::new(ShellRunner::new()),
        assistant,
    };

    let app = router(ctx);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, "webcode server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
