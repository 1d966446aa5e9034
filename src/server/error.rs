//! HTTP 边界的错误分类与状态码映射

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::services::ports::{AssistError, StoreError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求体不符合 schema：立即 400，不重试，不改本地状态。
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// 存储写入失败（乐观本地变更已生效的那类也走这里）。
    #[error("{0}")]
    Persistence(String),
    /// 执行器无法启动。
    #[error("execution failed: {0}")]
    Execution(String),
    #[error("{0}")]
    Generation(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) | ApiError::Execution(_) | ApiError::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// StoreError::NotFound 带上资源名映射成 404。
    pub fn from_store(err: StoreError, resource: &'static str) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound(resource),
            StoreError::Conflict(msg) => ApiError::Validation(msg),
            StoreError::Backend(msg) => ApiError::Persistence(msg),
        }
    }
}

impl From<AssistError> for ApiError {
    fn from(err: AssistError) -> Self {
        ApiError::Generation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Json 提取器的包装：反序列化失败统一为 400 + 可读消息
/// （axum 默认给 422）。
pub struct ValidJson<T>(pub T);

#[async_trait::async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(ValidJson(value))
    }
}
