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
use crate::db::models::project::CreateProjectRequest;
use crate::error::AppResult;
use crate::services::projects_service::ProjectsService;
use crate::validation::ValidatedJson;

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateProjectRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let project = ProjectsService::create(&mut conn, auth.id, &payload)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(project, "Project created successfully")),
    ))
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let projects = ProjectsService::list(&mut conn, auth.id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(projects, "Projects retrieved successfully")),
    ))
}

pub async fn get_project_team(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let team = ProjectsService::team(&mut conn, auth.id, project_id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(team, "Project team retrieved successfully")),
    ))
}
