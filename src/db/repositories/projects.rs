use diesel::prelude::*;

use crate::db::models::project::{NewProject, NewProjectTeamMember, Project, ProjectTeamMember};

pub struct ProjectsRepo;

impl ProjectsRepo {
    pub fn insert(conn: &mut PgConnection, new_project: &NewProject) -> Result<Project, diesel::result::Error> {
        diesel::insert_into(crate::schema::projects::table)
            .values(new_project)
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, project_id: uuid::Uuid) -> Result<Option<Project>, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        projects.filter(id.eq(project_id)).first::<Project>(conn).optional()
    }

    pub fn code_exists_in_workplace(
        conn: &mut PgConnection,
        wp: uuid::Uuid,
        code: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::projects::dsl as p;
        diesel::select(diesel::dsl::exists(
            p::projects
                .filter(p::workplace_id.eq(wp))
                .filter(p::project_code.eq(code)),
        ))
        .get_result(conn)
    }

    pub fn list_by_workplace(conn: &mut PgConnection, wp: uuid::Uuid) -> Result<Vec<Project>, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        projects
            .filter(workplace_id.eq(wp))
            .order(created_at.desc())
            .load::<Project>(conn)
    }

    /// Projects visible to a non-elevated user: joined through view-granting
    /// access rows, restricted to the caller's own workplace.
    pub fn list_granted(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
        wp: uuid::Uuid,
    ) -> Result<Vec<Project>, diesel::result::Error> {
        use crate::schema::{project_access, projects};
        project_access::table
            .inner_join(projects::table)
            .filter(project_access::employee_id.eq(user_id))
            .filter(project_access::can_view.eq(true))
            .filter(projects::workplace_id.eq(wp))
            .select(Project::as_select())
            .order(projects::created_at.desc())
            .load::<Project>(conn)
    }

    pub fn insert_team_members(
        conn: &mut PgConnection,
        members: &[NewProjectTeamMember],
    ) -> Result<Vec<ProjectTeamMember>, diesel::result::Error> {
        diesel::insert_into(crate::schema::project_team_members::table)
            .values(members)
            .get_results(conn)
    }

    pub fn list_team(conn: &mut PgConnection, project: uuid::Uuid) -> Result<Vec<ProjectTeamMember>, diesel::result::Error> {
        use crate::schema::project_team_members::dsl::*;
        project_team_members
            .filter(project_id.eq(project))
            .order(full_name.asc())
            .load::<ProjectTeamMember>(conn)
    }
}
