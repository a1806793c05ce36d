use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::schema::project_photo_spots;

/// Named place anchor on a project's plan image. Photos reference a spot to
/// scope before/after pairing to one physical place.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = project_photo_spots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PhotoSpot {
    pub id: Uuid,
    pub project_id: Uuid,
    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
    pub label: String,
    pub plan_x: Option<f64>,
    pub plan_y: Option<f64>,
    pub orientation_deg: Option<f64>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = project_photo_spots)]
pub struct NewPhotoSpot {
    pub project_id: Uuid,
    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
    pub label: String,
    pub plan_x: Option<f64>,
    pub plan_y: Option<f64>,
    pub orientation_deg: Option<f64>,
    pub notes: Option<String>,
    pub created_by: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateSpotRequest {
    pub project_id: Uuid,
    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Label is required"))]
    pub label: String,

    #[validate(range(min = 0.0, max = 1.0, message = "plan_x must be within 0..=1"))]
    pub plan_x: Option<f64>,

    #[validate(range(min = 0.0, max = 1.0, message = "plan_y must be within 0..=1"))]
    pub plan_y: Option<f64>,

    #[validate(range(min = 0.0, max = 360.0, message = "orientation_deg must be within 0..=360"))]
    pub orientation_deg: Option<f64>,

    pub notes: Option<String>,

    #[validate(length(min = 1, max = 255, message = "created_by is required"))]
    pub created_by: String,
}
