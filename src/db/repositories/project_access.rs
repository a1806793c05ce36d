use diesel::prelude::*;

use crate::db::models::project_access::{NewProjectAccess, ProjectAccess, UpdateProjectAccess};

pub struct ProjectAccessRepo;

impl ProjectAccessRepo {
    pub fn insert(conn: &mut PgConnection, new_access: &NewProjectAccess) -> Result<ProjectAccess, diesel::result::Error> {
        diesel::insert_into(crate::schema::project_access::table)
            .values(new_access)
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, access_id: uuid::Uuid) -> Result<Option<ProjectAccess>, diesel::result::Error> {
        use crate::schema::project_access::dsl::*;
        project_access
            .filter(id.eq(access_id))
            .first::<ProjectAccess>(conn)
            .optional()
    }

    pub fn find_pair(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
        project: uuid::Uuid,
    ) -> Result<Option<ProjectAccess>, diesel::result::Error> {
        use crate::schema::project_access::dsl::*;
        project_access
            .filter(employee_id.eq(user_id))
            .filter(project_id.eq(project))
            .first::<ProjectAccess>(conn)
            .optional()
    }

    pub fn list_for_employee(conn: &mut PgConnection, user_id: uuid::Uuid) -> Result<Vec<ProjectAccess>, diesel::result::Error> {
        use crate::schema::project_access::dsl::*;
        project_access
            .filter(employee_id.eq(user_id))
            .order(created_at.desc())
            .load::<ProjectAccess>(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        access_id: uuid::Uuid,
        changes: &UpdateProjectAccess,
    ) -> Result<ProjectAccess, diesel::result::Error> {
        use crate::schema::project_access::dsl as pa;
        diesel::update(pa::project_access.filter(pa::id.eq(access_id)))
            .set((changes, pa::updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    pub fn delete_by_id(conn: &mut PgConnection, access_id: uuid::Uuid) -> Result<usize, diesel::result::Error> {
        use crate::schema::project_access::dsl::*;
        diesel::delete(project_access.filter(id.eq(access_id))).execute(conn)
    }
}
