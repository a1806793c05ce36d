use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::project_access;

/// Explicit per-employee per-project grant. The four capabilities are
/// independent booleans; absence of a row means no access for that pair.
/// `employee_id` stores the auth user id, matching how the resolver keys
/// its lookups.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = project_access)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectAccess {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub project_id: Uuid,
    pub can_view: bool,
    pub can_edit: bool,
    pub can_manage_tasks: bool,
    pub can_manage_team: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = project_access)]
pub struct NewProjectAccess {
    pub employee_id: Uuid,
    pub project_id: Uuid,
    pub can_view: bool,
    pub can_edit: bool,
    pub can_manage_tasks: bool,
    pub can_manage_team: bool,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = project_access)]
pub struct UpdateProjectAccess {
    pub can_view: Option<bool>,
    pub can_edit: Option<bool>,
    pub can_manage_tasks: Option<bool>,
    pub can_manage_team: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateProjectAccessRequest {
    pub employee_id: Uuid,
    pub project_id: Uuid,
    #[serde(default = "default_true")]
    pub can_view: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default = "default_true")]
    pub can_manage_tasks: bool,
    #[serde(default = "default_true")]
    pub can_manage_team: bool,
}

fn default_true() -> bool {
    true
}
