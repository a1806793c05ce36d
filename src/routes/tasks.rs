use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::task::CreateTaskRequest;
use crate::error::AppResult;
use crate::services::tasks_service::TasksService;
use crate::validation::ValidatedJson;

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateTaskRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let created = TasksService::create(&mut conn, auth.id, payload)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(created, "Task created successfully")),
    ))
}

pub async fn list_project_tasks(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let tasks = TasksService::list_for_project(&mut conn, auth.id, project_id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(tasks, "Tasks retrieved successfully")),
    ))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(task_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let task = TasksService::get(&mut conn, auth.id, task_id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(task, "Task retrieved successfully")),
    ))
}
