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
use crate::db::models::project_access::{CreateProjectAccessRequest, UpdateProjectAccess};
use crate::error::AppResult;
use crate::services::project_access_service::ProjectAccessService;

pub async fn create_access(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(payload): Json<CreateProjectAccessRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let access = ProjectAccessService::create(&mut conn, auth.id, &payload)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(access, "Access granted successfully")),
    ))
}

pub async fn list_access_for_employee(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(employee_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let list = ProjectAccessService::list_for_employee(&mut conn, auth.id, employee_id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(list, "Access grants retrieved successfully")),
    ))
}

pub async fn update_access(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(access_id): Path<Uuid>,
    Json(payload): Json<UpdateProjectAccess>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let access = ProjectAccessService::update(&mut conn, auth.id, access_id, &payload)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(access, "Access updated successfully")),
    ))
}

pub async fn delete_access(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(access_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    ProjectAccessService::delete(&mut conn, auth.id, access_id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::success((), "Access revoked successfully")),
    ))
}
