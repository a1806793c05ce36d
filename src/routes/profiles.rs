use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::profile::{EmployeeRole, UpdateProfile};
use crate::error::AppResult;
use crate::services::profiles_service::ProfilesService;

pub async fn get_me(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let profile = ProfilesService::me(&mut conn, auth.id, &state.asset_helper)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(profile, "Profile retrieved successfully")),
    ))
}

pub async fn update_me(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(payload): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let profile = ProfilesService::update_me(&mut conn, auth.id, &payload, &state.asset_helper)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(profile, "Profile updated successfully")),
    ))
}

pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let profiles = ProfilesService::list_workplace(&mut conn, auth.id, &state.asset_helper)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(profiles, "Profiles retrieved successfully")),
    ))
}

#[derive(Serialize)]
pub struct RoleInfo {
    pub value: EmployeeRole,
    pub label: &'static str,
    pub elevated: bool,
}

/// Static role catalog for UI dropdowns.
pub async fn get_roles() -> impl IntoResponse {
    let roles = vec![
        RoleInfo {
            value: EmployeeRole::Owner,
            label: "Owner",
            elevated: true,
        },
        RoleInfo {
            value: EmployeeRole::Admin,
            label: "Admin",
            elevated: true,
        },
        RoleInfo {
            value: EmployeeRole::Supervisor,
            label: "Supervisor",
            elevated: true,
        },
        RoleInfo {
            value: EmployeeRole::Member,
            label: "Member",
            elevated: false,
        },
        RoleInfo {
            value: EmployeeRole::Viewer,
            label: "Viewer",
            elevated: false,
        },
    ];

    (
        StatusCode::OK,
        Json(ApiResponse::success(roles, "Roles retrieved successfully")),
    )
}
