use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::project_access::{
        CreateProjectAccessRequest, NewProjectAccess, ProjectAccess, UpdateProjectAccess,
    },
    db::repositories::profiles::ProfilesRepo,
    db::repositories::project_access::ProjectAccessRepo,
    db::repositories::projects::ProjectsRepo,
    error::AppError,
    services::access_service::AccessService,
};

pub struct ProjectAccessService;

impl ProjectAccessService {
    /// Grants are managed by elevated roles only. Both the target project and
    /// the target employee must live in the caller's workplace.
    pub fn create(
        conn: &mut PgConnection,
        caller_id: Uuid,
        req: &CreateProjectAccessRequest,
    ) -> Result<ProjectAccess, AppError> {
        let caller = AccessService::require_elevated(conn, caller_id)?;
        let workplace_id = AccessService::require_workplace(&caller)?;

        let project = ProjectsRepo::find_by_id(conn, req.project_id)?
            .ok_or_else(|| AppError::not_found("project"))?;
        if project.workplace_id != workplace_id {
            return Err(AppError::not_found("project"));
        }

        let target = ProfilesRepo::find_by_id(conn, req.employee_id)?
            .ok_or_else(|| AppError::not_found("employee"))?;
        if target.workplace_id != Some(workplace_id) {
            return Err(AppError::not_found("employee"));
        }

        if ProjectAccessRepo::find_pair(conn, req.employee_id, req.project_id)?.is_some() {
            return Err(AppError::conflict_with_code(
                "Access already granted for this employee and project",
                None,
                "ACCESS_EXISTS",
            ));
        }

        let access = ProjectAccessRepo::insert(
            conn,
            &NewProjectAccess {
                employee_id: req.employee_id,
                project_id: req.project_id,
                can_view: req.can_view,
                can_edit: req.can_edit,
                can_manage_tasks: req.can_manage_tasks,
                can_manage_team: req.can_manage_team,
            },
        )?;

        Ok(access)
    }

    /// A user may always read their own grants; elevated roles may read any
    /// workplace member's.
    pub fn list_for_employee(
        conn: &mut PgConnection,
        caller_id: Uuid,
        employee_id: Uuid,
    ) -> Result<Vec<ProjectAccess>, AppError> {
        if caller_id != employee_id {
            let caller = AccessService::require_elevated(conn, caller_id)?;
            let workplace_id = AccessService::require_workplace(&caller)?;

            let target = ProfilesRepo::find_by_id(conn, employee_id)?
                .ok_or_else(|| AppError::not_found("employee"))?;
            if target.workplace_id != Some(workplace_id) {
                return Err(AppError::not_found("employee"));
            }
        }

        let list = ProjectAccessRepo::list_for_employee(conn, employee_id)?;
        Ok(list)
    }

    pub fn update(
        conn: &mut PgConnection,
        caller_id: Uuid,
        access_id: Uuid,
        changes: &UpdateProjectAccess,
    ) -> Result<ProjectAccess, AppError> {
        Self::require_grant_in_workplace(conn, caller_id, access_id)?;
        let updated = ProjectAccessRepo::update(conn, access_id, changes)?;
        Ok(updated)
    }

    /// Revoking a grant drops the row; the employee falls back to the no-row
    /// default of seeing only their own tasks.
    pub fn delete(
        conn: &mut PgConnection,
        caller_id: Uuid,
        access_id: Uuid,
    ) -> Result<(), AppError> {
        Self::require_grant_in_workplace(conn, caller_id, access_id)?;
        ProjectAccessRepo::delete_by_id(conn, access_id)?;
        Ok(())
    }

    fn require_grant_in_workplace(
        conn: &mut PgConnection,
        caller_id: Uuid,
        access_id: Uuid,
    ) -> Result<ProjectAccess, AppError> {
        let caller = AccessService::require_elevated(conn, caller_id)?;
        let workplace_id = AccessService::require_workplace(&caller)?;

        let access = ProjectAccessRepo::find_by_id(conn, access_id)?
            .ok_or_else(|| AppError::not_found("project access"))?;

        let project = ProjectsRepo::find_by_id(conn, access.project_id)?
            .ok_or_else(|| AppError::not_found("project"))?;
        if project.workplace_id != workplace_id {
            return Err(AppError::not_found("project access"));
        }

        Ok(access)
    }
}
