use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::schema::{project_team_members, projects};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: Uuid,
    pub workplace_id: Uuid,
    pub name: String,
    pub location: String,
    pub project_code: String,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub supervisor: Option<String>,
    pub work_type: Option<String>,
    pub notes: Option<String>,
    pub plan_image_url: Option<String>,
    pub allow_gps: bool,
    pub client_name: Option<String>,
    pub budget: Option<f64>,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = projects)]
pub struct NewProject {
    pub workplace_id: Uuid,
    pub name: String,
    pub location: String,
    pub project_code: String,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub supervisor: Option<String>,
    pub work_type: Option<String>,
    pub notes: Option<String>,
    pub plan_image_url: Option<String>,
    pub allow_gps: bool,
    pub client_name: Option<String>,
    pub budget: Option<f64>,
    pub created_by: Uuid,
}

/// Snapshot of a person assigned at project creation time. A historical
/// record, not a live join against employees or users.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = project_team_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectTeamMember {
    pub id: Uuid,
    pub project_id: Uuid,
    pub created_by: Uuid,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub user_id_external: Option<Uuid>,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = project_team_members)]
pub struct NewProjectTeamMember {
    pub project_id: Uuid,
    pub created_by: Uuid,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub user_id_external: Option<Uuid>,
    pub role: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateProjectRequest {
    pub workplace_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Project name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    #[validate(custom(function = "crate::validation::rules::validate_project_code"))]
    pub project_code: String,

    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub supervisor: Option<String>,
    pub work_type: Option<String>,
    pub notes: Option<String>,
    pub plan_image_url: Option<String>,
    #[serde(default)]
    pub allow_gps: bool,
    pub client_name: Option<String>,
    pub budget: Option<f64>,
    #[serde(default)]
    pub team_members: Vec<TeamMemberInput>,
}

#[derive(Deserialize, Validate)]
pub struct TeamMemberInput {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
    pub role: Option<String>,
}
