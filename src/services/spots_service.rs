use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::spot::{CreateSpotRequest, NewPhotoSpot, PhotoSpot},
    db::repositories::spots::{SpotFilter, SpotsRepo},
    error::AppError,
    services::access_service::AccessService,
};

pub struct SpotsService;

impl SpotsService {
    /// Spot placement edits the project plan, so it rides the edit
    /// capability.
    pub fn create(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &CreateSpotRequest,
    ) -> Result<PhotoSpot, AppError> {
        let (decision, project) = AccessService::resolve_project(conn, user_id, req.project_id)?;

        if !decision.can_edit() {
            return Err(AppError::forbidden("No edit access for this project"));
        }

        let spot = SpotsRepo::insert(
            conn,
            &NewPhotoSpot {
                project_id: project.id,
                area: req.area.clone(),
                floor: req.floor.clone(),
                room: req.room.clone(),
                label: req.label.clone(),
                plan_x: req.plan_x,
                plan_y: req.plan_y,
                orientation_deg: req.orientation_deg,
                notes: req.notes.clone(),
                created_by: req.created_by.clone(),
            },
        )?;

        Ok(spot)
    }

    pub fn list(
        conn: &mut PgConnection,
        user_id: Uuid,
        project_id: Uuid,
        filter: &SpotFilter,
    ) -> Result<Vec<PhotoSpot>, AppError> {
        // Spots are needed at capture time, so any member who can reach the
        // project may list them.
        let (_, project) = AccessService::resolve_project(conn, user_id, project_id)?;
        let spots = SpotsRepo::list_by_project(conn, project.id, filter)?;
        Ok(spots)
    }
}
