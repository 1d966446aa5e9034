//! REST 路由：项目/文件 CRUD、命令执行、代码助手
//!
//! 路由层只做 schema 校验和状态码映射，不触碰会话状态；
//! 会话内核在浏览器侧（或测试里）经 kernel::Store 驱动。

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::{EntryPatch, NewEntry, NewProject};
use crate::services::ports::{CodeAssistant, EntryStore, ExecOutcome, ProcessRunner};

use super::error::{ApiError, ValidJson};

#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn EntryStore>,
    pub runner: Arc<dyn ProcessRunner>,
    /// 未配置生成服务时为 None，/api/ai/* 返回 500。
    pub assistant: Option<Arc<dyn CodeAssistant>>,
}

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/:id", get(get_project).delete(delete_project))
        .route("/api/projects/:id/files", get(list_files))
        .route("/api/files", post(create_file))
        .route(
            "/api/files/:id",
            get(get_file).put(update_file).delete(delete_file),
        )
        .route("/api/execute", post(execute))
        .route("/api/ai/complete", post(ai_complete))
        .route("/api/ai/explain", post(ai_explain))
        .route("/api/ai/fix", post(ai_fix))
        .route("/api/ai/document", post(ai_document))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(ctx)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ── projects ──

async fn list_projects(State(ctx): State<AppContext>) -> Result<impl IntoResponse, ApiError> {
    let projects = ctx
        .store
        .list_projects()
        .await
        .map_err(|e| ApiError::from_store(e, "Project"))?;
    Ok(Json(projects))
}

async fn get_project(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let project = ctx
        .store
        .get_project(id)
        .await
        .map_err(|e| ApiError::from_store(e, "Project"))?;
    Ok(Json(project))
}

async fn create_project(
    State(ctx): State<AppContext>,
    ValidJson(new): ValidJson<NewProject>,
) -> Result<impl IntoResponse, ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    let project = ctx
        .store
        .create_project(new)
        .await
        .map_err(|e| ApiError::from_store(e, "Project"))?;
    info!(project_id = project.id, name = %project.name, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

async fn delete_project(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    ctx.store
        .delete_project(id)
        .await
        .map_err(|e| ApiError::from_store(e, "Project"))?;
    info!(project_id = id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ── files ──

async fn list_files(
    State(ctx): State<AppContext>,
    Path(project_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    // 与原始接口一致：项目不存在时返回空列表而非 404。
    let entries = ctx
        .store
        .list_entries(project_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Project"))?;
    Ok(Json(entries))
}

async fn get_file(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = ctx
        .store
        .get_entry(id)
        .await
        .map_err(|e| ApiError::from_store(e, "File"))?;
    Ok(Json(entry))
}

async fn create_file(
    State(ctx): State<AppContext>,
    ValidJson(new): ValidJson<NewEntry>,
) -> Result<impl IntoResponse, ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    let entry = ctx
        .store
        .create_entry(new)
        .await
        .map_err(|e| ApiError::from_store(e, "Project"))?;
    info!(entry_id = entry.id, path = %entry.path, "file created");
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_file(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidJson(patch): ValidJson<EntryPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = ctx
        .store
        .update_entry(id, patch)
        .await
        .map_err(|e| ApiError::from_store(e, "File"))?;
    Ok(Json(entry))
}

async fn delete_file(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    ctx.store
        .delete_entry(id)
        .await
        .map_err(|e| ApiError::from_store(e, "File"))?;
    Ok(StatusCode::NO_CONTENT)
}

// ── execute ──

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub command: String,
    #[serde(default)]
    pub cwd: Option<String>,
}

async fn execute(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<ExecuteRequest>,
) -> Result<Json<ExecOutcome>, ApiError> {
    if req.command.trim().is_empty() {
        return Err(ApiError::Validation("command must not be empty".to_string()));
    }
    let outcome = ctx
        .runner
        .run(&req.command, req.cwd.as_deref())
        .await
        .map_err(|e| ApiError::Execution(e.to_string()))?;
    Ok(Json(outcome))
}

// ── ai ──

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub code: String,
    pub language: String,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub code: String,
    pub language: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixRequest {
    pub code: String,
    pub error: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub completion: String,
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixResponse {
    pub fixed_code: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentationResponse {
    pub documentation: String,
}

fn assistant(ctx: &AppContext) -> Result<&Arc<dyn CodeAssistant>, ApiError> {
    ctx.assistant
        .as_ref()
        .ok_or_else(|| ApiError::Generation("assistant not configured".to_string()))
}

async fn ai_complete(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<CompletionRequest>,
) -> Result<Json<CompletionResponse>, ApiError> {
    let completion = assistant(&ctx)?
        .complete(&req.code, &req.language, req.max_tokens)
        .await?;
    Ok(Json(CompletionResponse { completion }))
}

async fn ai_explain(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<ExplainRequest>,
) -> Result<Json<ExplanationResponse>, ApiError> {
    let explanation = assistant(&ctx)?.explain(&req.code, &req.language).await?;
    Ok(Json(ExplanationResponse { explanation }))
}

async fn ai_fix(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<FixRequest>,
) -> Result<Json<FixResponse>, ApiError> {
    let fixed_code = assistant(&ctx)?
        .fix(&req.code, &req.error, &req.language)
        .await?;
    Ok(Json(FixResponse { fixed_code }))
}

async fn ai_document(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<ExplainRequest>,
) -> Result<Json<DocumentationResponse>, ApiError> {
    let documentation = assistant(&ctx)?.document(&req.code, &req.language).await?;
    Ok(Json(DocumentationResponse { documentation }))
}
