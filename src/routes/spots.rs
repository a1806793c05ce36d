use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthUser;
use crate::db::models::spot::CreateSpotRequest;
use crate::db::repositories::spots::SpotFilter;
use crate::error::AppResult;
use crate::services::spots_service::SpotsService;
use crate::validation::ValidatedJson;

#[derive(Deserialize)]
pub struct SpotQuery {
    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
}

pub async fn create_spot(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateSpotRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let spot = SpotsService::create(&mut conn, auth.id, &payload)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(spot, "Photo spot created successfully")),
    ))
}

pub async fn list_project_spots(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    Query(params): Query<SpotQuery>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;

    let filter = SpotFilter {
        area: params.area,
        floor: params.floor,
        room: params.room,
    };

    let spots = SpotsService::list(&mut conn, auth.id, project_id, &filter)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(spots, "Photo spots retrieved successfully")),
    ))
}
