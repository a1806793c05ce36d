use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use uuid::Uuid;
use validator::Validate;

use crate::db::models::profile::EmployeeRole;
use crate::schema::employees;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, diesel::FromSqlRow, diesel::AsExpression,
)]
#[diesel(sql_type = crate::schema::sql_types::EmployeeStatus)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Invited,
    Active,
    Suspended,
}

impl diesel::serialize::ToSql<crate::schema::sql_types::EmployeeStatus, diesel::pg::Pg>
    for EmployeeStatus
{
    fn to_sql<'b>(
        &'b self,
        out: &mut diesel::serialize::Output<'b, '_, diesel::pg::Pg>,
    ) -> diesel::serialize::Result {
        match *self {
            EmployeeStatus::Invited => out.write_all(b"invited")?,
            EmployeeStatus::Active => out.write_all(b"active")?,
            EmployeeStatus::Suspended => out.write_all(b"suspended")?,
        }
        Ok(diesel::serialize::IsNull::No)
    }
}

impl diesel::deserialize::FromSql<crate::schema::sql_types::EmployeeStatus, diesel::pg::Pg>
    for EmployeeStatus
{
    fn from_sql(
        bytes: <diesel::pg::Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> diesel::deserialize::Result<Self> {
        match <String as diesel::deserialize::FromSql<diesel::sql_types::Text, diesel::pg::Pg>>::from_sql(bytes)?.as_str() {
            "invited" => Ok(EmployeeStatus::Invited),
            "active" => Ok(EmployeeStatus::Active),
            "suspended" => Ok(EmployeeStatus::Suspended),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

/// Workplace roster entry, distinct from the login profile. Carries the
/// invitation lifecycle: created invited with a single-use token, activated
/// once when the invite is completed.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    pub id: Uuid,
    pub workplace_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_token: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub invited_by: Option<Uuid>,
    pub avatar_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployee {
    pub workplace_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    pub invite_token: Option<Uuid>,
    pub invited_by: Option<Uuid>,
    pub avatar_url: Option<String>,
}

/// The target workplace is always the inviter's own, so the request carries
/// only the invitee's details.
#[derive(Deserialize, Validate)]
pub struct InviteEmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,
    pub role: Option<EmployeeRole>,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct CompleteInviteRequest {
    pub token: Uuid,

    #[validate(custom(function = "crate::validation::rules::validate_password_strength"))]
    pub password: String,
}

/// Invite creation response: the roster row plus the join link the frontend
/// emails or hands out.
#[derive(Serialize)]
pub struct InviteCreated {
    pub employee: Employee,
    pub join_link: String,
}

/// Public shape returned when a join link is verified, before any credential
/// exists. Deliberately minimal.
#[derive(Serialize)]
pub struct InvitePreview {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}
