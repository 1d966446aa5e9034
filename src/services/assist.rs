//! 代码助手 adapter：chat-completions 风格的文本生成客户端
//!
//! 服务视为无状态的请求/响应函数。修复操作要求 JSON 结构化输出，
//! 解析失败时退回原始代码而不是让调用方失败。

use async_trait::async_trait;
use serde::Deserialize;

use super::ports::{AssistError, CodeAssistant};

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Clone)]
pub struct OpenAiAssistant {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiAssistant {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            model,
            ..Self::new(api_key)
        }
    }

    /// 测试/自托管网关用。
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: Option<u32>,
        json_mode: bool,
    ) -> Result<String, AssistError> {
        let mut body = serde_json::json!({
            "model": &self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ],
            "max_tokens": max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        });
        if json_mode {
            body["response_format"] = serde_json::json!({"type": "json_object"});
        }

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|err| AssistError::Service(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AssistError::Service(format!("API error {status}: {text}")));
        }

        #[derive(Deserialize)]
        struct Message {
            content: String,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            choices: Vec<Choice>,
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|err| AssistError::Malformed(err.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AssistError::Malformed("no choices in response".to_string()))
    }
}

/// 从结构化修复响应里取 fixedCode；取不出来就还原始代码。
fn extract_fixed_code(response: &str, original: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(response) {
        Ok(value) => value
            .get("fixedCode")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| original.to_string()),
        Err(_) => original.to_string(),
    }
}

#[async_trait]
impl CodeAssistant for OpenAiAssistant {
    async fn complete(
        &self,
        code: &str,
        language: &str,
        max_tokens: Option<u32>,
    ) -> Result<String, AssistError> {
        let system = format!(
            "You are an AI programming assistant embedded in a code editor. \
             You will complete the code based on the context. \
             You will only provide the completion, not explanations. \
             Use proper indentation and follow best practices for {language}."
        );
        self.chat(&system, code, max_tokens, false).await
    }

    async fn explain(&self, code: &str, language: &str) -> Result<String, AssistError> {
        let system = format!(
            "You are an AI programming assistant embedded in a code editor. \
             Explain the following {language} code in a clear, concise way. \
             Focus on what the code does, any patterns or algorithms used, and potential issues."
        );
        self.chat(&system, code, None, false).await
    }

    async fn document(&self, code: &str, language: &str) -> Result<String, AssistError> {
        let system = format!(
            "You are an AI programming assistant embedded in a code editor. \
             Generate documentation for the following {language} code. \
             Include function/class descriptions, parameters, return values, and example usage. \
             Return the documentation in a format appropriate for {language}."
        );
        self.chat(&system, code, None, false).await
    }

    async fn fix(&self, code: &str, error: &str, language: &str) -> Result<String, AssistError> {
        let system = format!(
            "You are an AI programming assistant embedded in a code editor. \
             Fix the following {language} code that has an error. \
             Respond with a JSON object of the form {{\"fixedCode\": \"...\"}} \
             and no other keys. Error message: {error}"
        );
        let response = self.chat(&system, code, None, true).await?;
        Ok(extract_fixed_code(&response, code))
    }
}
