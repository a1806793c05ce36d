use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::error::AppResult;
use crate::services::auth_service::AuthService;
use crate::validation::ValidatedJson;

pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let (user, profile) =
        AuthService::register(&mut conn, &payload, state.config.bcrypt_cost)?;

    let tokens = AuthService::issue_tokens(&state.auth_service, user.id, &user.email)?;

    let body = serde_json::json!({
        "profile": profile,
        "tokens": tokens,
    });

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(body, "Account created successfully")),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let tokens = AuthService::login(&mut conn, &state.auth_service, &payload)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(tokens, "Login successful")),
    ))
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let tokens = AuthService::refresh(&mut conn, &state.auth_service, &payload.refresh_token)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(tokens, "Token refreshed")),
    ))
}
