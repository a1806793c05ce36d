use diesel::prelude::*;

use crate::db::models::workplace::{NewWorkplace, Workplace};

pub struct WorkplacesRepo;

impl WorkplacesRepo {
    pub fn insert(conn: &mut PgConnection, new_wp: &NewWorkplace) -> Result<Workplace, diesel::result::Error> {
        diesel::insert_into(crate::schema::workplaces::table)
            .values(new_wp)
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, wp_id: uuid::Uuid) -> Result<Option<Workplace>, diesel::result::Error> {
        use crate::schema::workplaces::dsl::*;
        workplaces.filter(id.eq(wp_id)).first::<Workplace>(conn).optional()
    }

    pub fn slug_exists(conn: &mut PgConnection, slug_val: &str) -> Result<bool, diesel::result::Error> {
        use crate::schema::workplaces::dsl as w;
        diesel::select(diesel::dsl::exists(w::workplaces.filter(w::slug.eq(slug_val))))
            .get_result(conn)
    }

    pub fn list_by_creator(conn: &mut PgConnection, user_id: uuid::Uuid) -> Result<Vec<Workplace>, diesel::result::Error> {
        use crate::schema::workplaces::dsl::*;
        workplaces
            .filter(created_by.eq(user_id))
            .order(created_at.desc())
            .load::<Workplace>(conn)
    }
}
