//! 服务器配置：全部来自环境变量，带合理默认值

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    /// 空库时是否播种示例项目。
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let addr =
            std::env::var("WEBCODE_ADDR").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        let seed_demo = std::env::var("WEBCODE_SEED_DEMO")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        Self {
            addr,
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: std::env::var("OPENAI_MODEL").ok().filter(|m| !m.is_empty()),
            seed_demo,
        }
    }
}
