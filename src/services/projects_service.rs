use diesel::Connection;
use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::project::{
        CreateProjectRequest, NewProject, NewProjectTeamMember, Project, ProjectTeamMember,
    },
    db::repositories::projects::ProjectsRepo,
    error::AppError,
    services::access_service::AccessService,
    validation::project::{validate_budget, validate_project_dates},
};

pub struct ProjectsService;

impl ProjectsService {
    /// Elevated roles only. Team members are stored as point-in-time
    /// snapshot rows, independent of the employee roster.
    pub fn create(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &CreateProjectRequest,
    ) -> Result<Project, AppError> {
        let profile = AccessService::require_elevated(conn, user_id)?;
        let workplace_id = AccessService::require_workplace(&profile)?;

        if req.workplace_id != workplace_id {
            return Err(AppError::forbidden(
                "Cannot create a project in another workplace",
            ));
        }

        validate_project_dates(req)?;
        validate_budget(req.budget)?;

        if ProjectsRepo::code_exists_in_workplace(conn, workplace_id, &req.project_code)? {
            return Err(AppError::conflict_with_code(
                "Project code already exists in this workplace",
                Some("project_code".into()),
                "PROJECT_CODE_EXISTS",
            ));
        }

        let project = conn.transaction::<Project, AppError, _>(|tx| {
            let project = ProjectsRepo::insert(
                tx,
                &NewProject {
                    workplace_id,
                    name: req.name.clone(),
                    location: req.location.clone(),
                    project_code: req.project_code.clone(),
                    start_date: req.start_date,
                    end_date: req.end_date,
                    supervisor: req.supervisor.clone(),
                    work_type: req.work_type.clone(),
                    notes: req.notes.clone(),
                    plan_image_url: req.plan_image_url.clone(),
                    allow_gps: req.allow_gps,
                    client_name: req.client_name.clone(),
                    budget: req.budget,
                    created_by: user_id,
                },
            )?;

            if !req.team_members.is_empty() {
                let members: Vec<NewProjectTeamMember> = req
                    .team_members
                    .iter()
                    .map(|m| NewProjectTeamMember {
                        project_id: project.id,
                        created_by: user_id,
                        full_name: m.full_name.clone(),
                        avatar_url: m.avatar_url.clone(),
                        phone: m.phone.clone(),
                        email: m.email.clone(),
                        user_id_external: m.user_id,
                        role: m.role.clone().unwrap_or_else(|| "member".to_string()),
                    })
                    .collect();

                ProjectsRepo::insert_team_members(tx, &members)?;
            }

            Ok(project)
        })?;

        Ok(project)
    }

    /// Project listing per role: elevated sees the whole workplace,
    /// member/viewer only projects with a view-granting access row. Authored
    /// tasks inside an unlisted project do not make the project visible.
    pub fn list(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Project>, AppError> {
        let profile = AccessService::load_profile(conn, user_id)?;
        let workplace_id = AccessService::require_workplace(&profile)?;

        if profile.role.is_elevated() {
            let projects = ProjectsRepo::list_by_workplace(conn, workplace_id)?;
            return Ok(projects);
        }

        let projects = ProjectsRepo::list_granted(conn, user_id, workplace_id)?;
        Ok(projects)
    }

    pub fn team(
        conn: &mut PgConnection,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<Vec<ProjectTeamMember>, AppError> {
        // Resolving access also enforces tenant containment.
        AccessService::resolve_project(conn, user_id, project_id)?;
        let team = ProjectsRepo::list_team(conn, project_id)?;
        Ok(team)
    }
}
