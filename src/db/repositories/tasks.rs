use diesel::prelude::*;

use crate::db::models::task::{NewTask, NewTaskPhoto, Task, TaskPhoto};

pub struct TasksRepo;

impl TasksRepo {
    pub fn insert(conn: &mut PgConnection, new_task: &NewTask) -> Result<Task, diesel::result::Error> {
        diesel::insert_into(crate::schema::tasks::table)
            .values(new_task)
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, task_id: uuid::Uuid) -> Result<Option<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks.filter(id.eq(task_id)).first::<Task>(conn).optional()
    }

    pub fn list_by_project(conn: &mut PgConnection, project: uuid::Uuid) -> Result<Vec<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks
            .filter(project_id.eq(project))
            .order(created_at.desc())
            .load::<Task>(conn)
    }

    pub fn list_by_project_and_creator(
        conn: &mut PgConnection,
        project: uuid::Uuid,
        creator: uuid::Uuid,
    ) -> Result<Vec<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks
            .filter(project_id.eq(project))
            .filter(created_by.eq(creator))
            .order(created_at.desc())
            .load::<Task>(conn)
    }

    pub fn insert_photos(
        conn: &mut PgConnection,
        photos: &[NewTaskPhoto],
    ) -> Result<Vec<TaskPhoto>, diesel::result::Error> {
        diesel::insert_into(crate::schema::task_photos::table)
            .values(photos)
            .get_results(conn)
    }

    pub fn list_photos(conn: &mut PgConnection, task: uuid::Uuid) -> Result<Vec<TaskPhoto>, diesel::result::Error> {
        use crate::schema::task_photos::dsl::*;
        task_photos
            .filter(task_id.eq(task))
            .order(captured_at.asc())
            .load::<TaskPhoto>(conn)
    }
}
