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
use crate::db::models::employee::{CompleteInviteRequest, InviteCreated, InviteEmployeeRequest};
use crate::error::{AppError, AppResult};
use crate::services::auth_service::AuthService;
use crate::services::employees_service::EmployeesService;
use crate::services::notifications::dispatch_invite;
use crate::validation::ValidatedJson;

pub async fn invite_employee(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<InviteEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let employee = EmployeesService::invite(&mut conn, auth.id, &payload)?;

    let token = employee
        .invite_token
        .ok_or_else(|| AppError::internal("Invite created without a token"))?;
    let join_link = state.config.join_link(token);

    // Delivery happens after the row is committed and never blocks the
    // response.
    dispatch_invite(
        state.notifier.clone(),
        employee.email.clone(),
        employee.full_name.clone(),
        join_link.clone(),
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            InviteCreated {
                employee,
                join_link,
            },
            "Employee invited successfully",
        )),
    ))
}

pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let employees = EmployeesService::list(&mut conn, auth.id)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(employees, "Employees retrieved successfully")),
    ))
}

/// Public: resolves a join link to the invitee preview. No auth; the token is
/// the credential.
pub async fn verify_invite(
    State(state): State<Arc<AppState>>,
    Path(token): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let preview = EmployeesService::verify_invite(&mut conn, token)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(preview, "Invite verified")),
    ))
}

/// Public: consumes the invite token, creates the account and returns a token
/// pair so the new employee lands signed in.
pub async fn complete_invite(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CompleteInviteRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let (employee, user) =
        EmployeesService::complete_invite(&mut conn, &payload, state.config.bcrypt_cost)?;

    let tokens = AuthService::issue_tokens(&state.auth_service, user.id, &user.email)?;

    let body = serde_json::json!({
        "employee": employee,
        "tokens": tokens,
    });

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(body, "Invite completed successfully")),
    ))
}
