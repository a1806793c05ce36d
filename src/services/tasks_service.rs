use chrono::Utc;
use diesel::Connection;
use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::task::{
        CreateTaskRequest, NewTask, NewTaskPhoto, Task, TaskCreated, TaskPhoto, TaskWithPhotos,
    },
    db::repositories::tasks::TasksRepo,
    error::AppError,
    services::access_service::{AccessService, TaskVisibility},
    utils::photo_pairing::assign_pair_ids,
    validation::task::validate_photo_batch,
};

pub struct TasksService;

impl TasksService {
    /// Persists one task with its photo batch atomically. Pairing runs over
    /// the photos in submission order before any row is written, so the
    /// stored pair ids are final.
    pub fn create(
        conn: &mut PgConnection,
        user_id: Uuid,
        mut req: CreateTaskRequest,
    ) -> Result<TaskCreated, AppError> {
        // Any roster member may submit work to a project inside their
        // workplace. Grants only shape what they see back, not what they can
        // document; the resolver already rejects cross-tenant projects.
        let (_, project) = AccessService::resolve_project(conn, user_id, req.project_id)?;

        validate_photo_batch(&req.photos)?;

        assign_pair_ids(&mut req.photos, Uuid::new_v4);

        let created = conn.transaction::<TaskCreated, AppError, _>(|tx| {
            let task = TasksRepo::insert(
                tx,
                &NewTask {
                    project_id: project.id,
                    project_code: req.project_code.clone(),
                    project_name: req.project_name.clone(),
                    location: req.location.clone(),
                    area: req.area.clone(),
                    floor: req.floor.clone(),
                    room: req.room.clone(),
                    work_package: req.work_package.clone(),
                    supervisor: req.supervisor.clone(),
                    allow_gps: req.allow_gps,
                    notes: req.notes.clone(),
                    created_by: user_id,
                    created_by_name: req.created_by_name.clone(),
                },
            )?;

            let batch_group = Uuid::new_v4();
            let now = Utc::now();

            let photos: Vec<NewTaskPhoto> = req
                .photos
                .iter()
                .map(|p| NewTaskPhoto {
                    task_id: task.id,
                    client_photo_id: p.id.clone(),
                    file_name: p.file_name.clone(),
                    url: p.data_url.clone(),
                    mime_type: p.mime_type.clone(),
                    size_bytes: p.size,
                    phase: p.phase,
                    status: p.status,
                    description: p.description.clone(),
                    employees_on_task: p.employees_on_task,
                    materials: p.materials.clone(),
                    started_at: p.started_at,
                    finished_at: p.finished_at,
                    duration_mins: p.duration_mins,
                    location_tag: p.location_tag.clone(),
                    captured_at: p.captured_at.unwrap_or(now),
                    capture_group_id: p.capture_group_id.unwrap_or(batch_group),
                    spot_id: p.spot_id,
                    pair_id: p.pair_id,
                })
                .collect();

            let inserted = TasksRepo::insert_photos(tx, &photos)?;

            Ok(TaskCreated {
                id: task.id,
                photos: inserted.len(),
            })
        })?;

        Ok(created)
    }

    /// Task listing under the resolved visibility: full project feed with a
    /// view grant or elevated role, otherwise only the caller's own
    /// submissions.
    pub fn list_for_project(
        conn: &mut PgConnection,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<Vec<Task>, AppError> {
        let (decision, project) = AccessService::resolve_project(conn, user_id, project_id)?;

        let tasks = match decision.task_visibility() {
            TaskVisibility::All => TasksRepo::list_by_project(conn, project.id)?,
            TaskVisibility::OwnOnly => {
                TasksRepo::list_by_project_and_creator(conn, project.id, user_id)?
            }
        };

        Ok(tasks)
    }

    pub fn get(
        conn: &mut PgConnection,
        user_id: Uuid,
        task_id: Uuid,
    ) -> Result<TaskWithPhotos, AppError> {
        let task =
            TasksRepo::find_by_id(conn, task_id)?.ok_or_else(|| AppError::not_found("task"))?;

        let (decision, _) = AccessService::resolve_project(conn, user_id, task.project_id)?;

        // Own-only visibility extends to single-task reads.
        if decision.task_visibility() == TaskVisibility::OwnOnly && task.created_by != user_id {
            return Err(AppError::not_found("task"));
        }

        let photos = Self::photos(conn, task.id)?;
        Ok(TaskWithPhotos { task, photos })
    }

    pub fn photos(conn: &mut PgConnection, task_id: Uuid) -> Result<Vec<TaskPhoto>, AppError> {
        let photos = TasksRepo::list_photos(conn, task_id)?;
        Ok(photos)
    }
}
