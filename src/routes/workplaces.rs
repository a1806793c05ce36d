use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::workplace::CreateWorkplaceRequest;
use crate::error::AppResult;
use crate::services::workplaces_service::WorkplacesService;
use crate::validation::ValidatedJson;

pub async fn create_workplace(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateWorkplaceRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let workplace = WorkplacesService::create(&mut conn, auth.id, &payload)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(workplace, "Workplace created successfully")),
    ))
}

pub async fn list_workplaces(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let workplaces = WorkplacesService::list_for_user(&mut conn, auth.id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(workplaces, "Workplaces retrieved successfully")),
    ))
}
