use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use uuid::Uuid;
use validator::Validate;

use crate::schema::{task_photos, tasks};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, diesel::FromSqlRow, diesel::AsExpression,
)]
#[diesel(sql_type = crate::schema::sql_types::PhotoPhase)]
#[serde(rename_all = "lowercase")]
pub enum PhotoPhase {
    Before,
    After,
    Other,
}

impl diesel::serialize::ToSql<crate::schema::sql_types::PhotoPhase, diesel::pg::Pg> for PhotoPhase {
    fn to_sql<'b>(
        &'b self,
        out: &mut diesel::serialize::Output<'b, '_, diesel::pg::Pg>,
    ) -> diesel::serialize::Result {
        match *self {
            PhotoPhase::Before => out.write_all(b"before")?,
            PhotoPhase::After => out.write_all(b"after")?,
            PhotoPhase::Other => out.write_all(b"other")?,
        }
        Ok(diesel::serialize::IsNull::No)
    }
}

impl diesel::deserialize::FromSql<crate::schema::sql_types::PhotoPhase, diesel::pg::Pg>
    for PhotoPhase
{
    fn from_sql(
        bytes: <diesel::pg::Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> diesel::deserialize::Result<Self> {
        match <String as diesel::deserialize::FromSql<diesel::sql_types::Text, diesel::pg::Pg>>::from_sql(bytes)?.as_str() {
            "before" => Ok(PhotoPhase::Before),
            "after" => Ok(PhotoPhase::After),
            "other" => Ok(PhotoPhase::Other),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, diesel::FromSqlRow, diesel::AsExpression,
)]
#[diesel(sql_type = crate::schema::sql_types::PhotoStatus)]
#[serde(rename_all = "snake_case")]
pub enum PhotoStatus {
    NotStarted,
    InProgress,
    Blocked,
    Finished,
}

impl diesel::serialize::ToSql<crate::schema::sql_types::PhotoStatus, diesel::pg::Pg>
    for PhotoStatus
{
    fn to_sql<'b>(
        &'b self,
        out: &mut diesel::serialize::Output<'b, '_, diesel::pg::Pg>,
    ) -> diesel::serialize::Result {
        match *self {
            PhotoStatus::NotStarted => out.write_all(b"not_started")?,
            PhotoStatus::InProgress => out.write_all(b"in_progress")?,
            PhotoStatus::Blocked => out.write_all(b"blocked")?,
            PhotoStatus::Finished => out.write_all(b"finished")?,
        }
        Ok(diesel::serialize::IsNull::No)
    }
}

impl diesel::deserialize::FromSql<crate::schema::sql_types::PhotoStatus, diesel::pg::Pg>
    for PhotoStatus
{
    fn from_sql(
        bytes: <diesel::pg::Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> diesel::deserialize::Result<Self> {
        match <String as diesel::deserialize::FromSql<diesel::sql_types::Text, diesel::pg::Pg>>::from_sql(bytes)?.as_str() {
            "not_started" => Ok(PhotoStatus::NotStarted),
            "in_progress" => Ok(PhotoStatus::InProgress),
            "blocked" => Ok(PhotoStatus::Blocked),
            "finished" => Ok(PhotoStatus::Finished),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub project_code: String,
    pub project_name: String,
    pub location: String,
    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
    pub work_package: Option<String>,
    pub supervisor: Option<String>,
    pub allow_gps: bool,
    pub notes: Option<String>,
    pub created_by: Uuid,
    pub created_by_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTask {
    pub project_id: Uuid,
    pub project_code: String,
    pub project_name: String,
    pub location: String,
    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
    pub work_package: Option<String>,
    pub supervisor: Option<String>,
    pub allow_gps: bool,
    pub notes: Option<String>,
    pub created_by: Uuid,
    pub created_by_name: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = task_photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskPhoto {
    pub id: Uuid,
    pub task_id: Uuid,
    pub client_photo_id: String,
    pub file_name: String,
    pub url: Option<String>,
    pub mime_type: Option<String>,
    pub size_bytes: Option<i64>,
    pub phase: PhotoPhase,
    pub status: PhotoStatus,
    pub description: Option<String>,
    pub employees_on_task: i32,
    pub materials: Vec<String>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
    pub duration_mins: i32,
    pub location_tag: Option<String>,
    pub captured_at: chrono::DateTime<chrono::Utc>,
    pub capture_group_id: Uuid,
    pub spot_id: Option<Uuid>,
    pub pair_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = task_photos)]
pub struct NewTaskPhoto {
    pub task_id: Uuid,
    pub client_photo_id: String,
    pub file_name: String,
    pub url: Option<String>,
    pub mime_type: Option<String>,
    pub size_bytes: Option<i64>,
    pub phase: PhotoPhase,
    pub status: PhotoStatus,
    pub description: Option<String>,
    pub employees_on_task: i32,
    pub materials: Vec<String>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
    pub duration_mins: i32,
    pub location_tag: Option<String>,
    pub captured_at: chrono::DateTime<chrono::Utc>,
    pub capture_group_id: Uuid,
    pub spot_id: Option<Uuid>,
    pub pair_id: Option<Uuid>,
}

#[derive(Deserialize, Validate)]
pub struct CreateTaskRequest {
    pub project_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Project code is required"))]
    pub project_code: String,

    #[validate(length(min = 1, max = 255, message = "Project name is required"))]
    pub project_name: String,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
    pub work_package: Option<String>,
    pub supervisor: Option<String>,
    #[serde(default)]
    pub allow_gps: bool,
    pub notes: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Creator name is required"))]
    pub created_by_name: String,

    #[validate(length(min = 1, message = "At least one photo is required"))]
    pub photos: Vec<PhotoUpload>,
}

/// One captured photo as submitted by the client, in capture order. The
/// pairing engine fills `pair_id` for photos that arrive without one.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PhotoUpload {
    pub id: String,
    pub file_name: String,
    pub data_url: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub phase: PhotoPhase,
    pub status: PhotoStatus,
    pub description: Option<String>,
    #[serde(default)]
    pub employees_on_task: i32,
    #[serde(default)]
    pub materials: Vec<String>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub duration_mins: i32,
    pub location_tag: Option<String>,
    pub captured_at: Option<chrono::DateTime<chrono::Utc>>,
    pub capture_group_id: Option<Uuid>,
    pub spot_id: Option<Uuid>,
    pub pair_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct TaskWithPhotos {
    #[serde(flatten)]
    pub task: Task,
    pub photos: Vec<TaskPhoto>,
}

#[derive(Serialize)]
pub struct TaskCreated {
    pub id: Uuid,
    pub photos: usize,
}
