use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use uuid::Uuid;

use crate::schema::profiles;

/// Workplace-scoped role. Owner, admin and supervisor are workplace-wide
/// superusers; member and viewer go through the project-access matrix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, diesel::FromSqlRow, diesel::AsExpression,
)]
#[diesel(sql_type = crate::schema::sql_types::EmployeeRole)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    Owner,
    Admin,
    Supervisor,
    Member,
    Viewer,
}

impl EmployeeRole {
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin | Self::Supervisor)
    }
}

impl diesel::serialize::ToSql<crate::schema::sql_types::EmployeeRole, diesel::pg::Pg>
    for EmployeeRole
{
    fn to_sql<'b>(
        &'b self,
        out: &mut diesel::serialize::Output<'b, '_, diesel::pg::Pg>,
    ) -> diesel::serialize::Result {
        match *self {
            EmployeeRole::Owner => out.write_all(b"owner")?,
            EmployeeRole::Admin => out.write_all(b"admin")?,
            EmployeeRole::Supervisor => out.write_all(b"supervisor")?,
            EmployeeRole::Member => out.write_all(b"member")?,
            EmployeeRole::Viewer => out.write_all(b"viewer")?,
        }
        Ok(diesel::serialize::IsNull::No)
    }
}

impl diesel::deserialize::FromSql<crate::schema::sql_types::EmployeeRole, diesel::pg::Pg>
    for EmployeeRole
{
    fn from_sql(
        bytes: <diesel::pg::Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> diesel::deserialize::Result<Self> {
        match <String as diesel::deserialize::FromSql<diesel::sql_types::Text, diesel::pg::Pg>>::from_sql(bytes)?.as_str() {
            "owner" => Ok(EmployeeRole::Owner),
            "admin" => Ok(EmployeeRole::Admin),
            "supervisor" => Ok(EmployeeRole::Supervisor),
            "member" => Ok(EmployeeRole::Member),
            "viewer" => Ok(EmployeeRole::Viewer),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

/// Per-user projection holding the current role and workplace assignment.
/// Source of truth for "which workplace does this session belong to".
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: EmployeeRole,
    pub workplace_id: Option<Uuid>,
    pub avatar_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: EmployeeRole,
    pub workplace_id: Option<Uuid>,
    pub avatar_url: Option<String>,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = profiles)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}
