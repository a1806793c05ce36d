use diesel::prelude::*;

use crate::db::models::spot::{NewPhotoSpot, PhotoSpot};

pub struct SpotsRepo;

#[derive(Default)]
pub struct SpotFilter {
    pub area: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
}

impl SpotsRepo {
    pub fn insert(conn: &mut PgConnection, new_spot: &NewPhotoSpot) -> Result<PhotoSpot, diesel::result::Error> {
        diesel::insert_into(crate::schema::project_photo_spots::table)
            .values(new_spot)
            .get_result(conn)
    }

    pub fn list_by_project(
        conn: &mut PgConnection,
        project: uuid::Uuid,
        filter: &SpotFilter,
    ) -> Result<Vec<PhotoSpot>, diesel::result::Error> {
        use crate::schema::project_photo_spots::dsl::*;

        let mut query = project_photo_spots
            .filter(project_id.eq(project))
            .into_boxed();

        if let Some(ref area_val) = filter.area {
            query = query.filter(area.eq(area_val.clone()));
        }
        if let Some(ref floor_val) = filter.floor {
            query = query.filter(floor.eq(floor_val.clone()));
        }
        if let Some(ref room_val) = filter.room {
            query = query.filter(room.eq(room_val.clone()));
        }

        query.order(created_at.desc()).load::<PhotoSpot>(conn)
    }
}
