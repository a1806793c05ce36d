use diesel::PgConnection;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::models::profile::{EmployeeRole, Profile},
    db::models::project::Project,
    db::models::project_access::ProjectAccess,
    db::repositories::profiles::ProfilesRepo,
    db::repositories::project_access::ProjectAccessRepo,
    db::repositories::projects::ProjectsRepo,
    error::AppError,
};

/// Independent capability booleans read off a project-access row. No
/// inheritance between them: each gates only the operation it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub can_view: bool,
    pub can_edit: bool,
    pub can_manage_tasks: bool,
    pub can_manage_team: bool,
}

impl Capabilities {
    pub fn none() -> Self {
        Self {
            can_view: false,
            can_edit: false,
            can_manage_tasks: false,
            can_manage_team: false,
        }
    }

    pub fn from_row(row: &ProjectAccess) -> Self {
        Self {
            can_view: row.can_view,
            can_edit: row.can_edit,
            can_manage_tasks: row.can_manage_tasks,
            can_manage_team: row.can_manage_team,
        }
    }
}

/// Outcome of resolving a user against a project. The elevated fast path is
/// kept as its own variant so a stale access row can never filter an
/// owner/admin/supervisor down to member capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccessDecision {
    Elevated,
    Scoped(Capabilities),
}

impl AccessDecision {
    pub fn can_view(&self) -> bool {
        match self {
            Self::Elevated => true,
            Self::Scoped(caps) => caps.can_view,
        }
    }

    pub fn can_edit(&self) -> bool {
        match self {
            Self::Elevated => true,
            Self::Scoped(caps) => caps.can_edit,
        }
    }

    pub fn can_manage_tasks(&self) -> bool {
        match self {
            Self::Elevated => true,
            Self::Scoped(caps) => caps.can_manage_tasks,
        }
    }

    pub fn can_manage_team(&self) -> bool {
        match self {
            Self::Elevated => true,
            Self::Scoped(caps) => caps.can_manage_team,
        }
    }

    pub fn task_visibility(&self) -> TaskVisibility {
        if self.can_view() {
            TaskVisibility::All
        } else {
            TaskVisibility::OwnOnly
        }
    }
}

/// How much of a project's task list the caller may see. `OwnOnly` is the
/// graceful-degradation default for members without a view grant: their own
/// submissions stay visible and manageable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskVisibility {
    All,
    OwnOnly,
}

/// Pure decision core, separated from row loading so tests can drive it with
/// in-memory values. `access_row` is whatever grant exists for the
/// (user, project) pair, if any.
pub fn decide(role: EmployeeRole, access_row: Option<&ProjectAccess>) -> AccessDecision {
    if role.is_elevated() {
        return AccessDecision::Elevated;
    }

    // member and viewer take the same scoped path
    match access_row {
        Some(row) => AccessDecision::Scoped(Capabilities::from_row(row)),
        None => AccessDecision::Scoped(Capabilities::none()),
    }
}

pub struct AccessService;

impl AccessService {
    /// Loads the caller's profile, failing with the distinct configuration
    /// errors before any permission logic runs.
    pub fn load_profile(conn: &mut PgConnection, user_id: Uuid) -> Result<Profile, AppError> {
        ProfilesRepo::find_by_id(conn, user_id)?.ok_or(AppError::ProfileMissing)
    }

    pub fn require_workplace(profile: &Profile) -> Result<Uuid, AppError> {
        profile.workplace_id.ok_or(AppError::NoWorkplaceAssigned)
    }

    /// Resolves what `user_id` may do with `project_id`. Cross-tenant
    /// projects are reported as not found before any access-row lookup, so a
    /// stray grant row cannot leak another workplace's project.
    pub fn resolve_project(
        conn: &mut PgConnection,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<(AccessDecision, Project), AppError> {
        let profile = Self::load_profile(conn, user_id)?;
        let workplace_id = Self::require_workplace(&profile)?;

        let project = ProjectsRepo::find_by_id(conn, project_id)?
            .ok_or_else(|| AppError::not_found("project"))?;

        if project.workplace_id != workplace_id {
            return Err(AppError::not_found("project"));
        }

        if profile.role.is_elevated() {
            return Ok((AccessDecision::Elevated, project));
        }

        let access_row = ProjectAccessRepo::find_pair(conn, user_id, project_id)?;
        Ok((decide(profile.role, access_row.as_ref()), project))
    }

    /// Elevated-role gate for administrative operations (project creation,
    /// access-matrix management, profile listing).
    pub fn require_elevated(conn: &mut PgConnection, user_id: Uuid) -> Result<Profile, AppError> {
        let profile = Self::load_profile(conn, user_id)?;
        if !profile.role.is_elevated() {
            return Err(AppError::forbidden(
                "This operation requires an owner, admin or supervisor role",
            ));
        }
        Ok(profile)
    }
}
