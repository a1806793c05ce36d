use diesel::prelude::*;

use crate::db::models::profile::{EmployeeRole, NewProfile, Profile, UpdateProfile};

pub struct ProfilesRepo;

impl ProfilesRepo {
    pub fn upsert(conn: &mut PgConnection, new_profile: &NewProfile) -> Result<Profile, diesel::result::Error> {
        use crate::schema::profiles::dsl as p;
        diesel::insert_into(p::profiles)
            .values(new_profile)
            .on_conflict(p::id)
            .do_update()
            .set((
                p::email.eq(&new_profile.email),
                p::full_name.eq(&new_profile.full_name),
                p::role.eq(new_profile.role),
                p::workplace_id.eq(new_profile.workplace_id),
                p::avatar_url.eq(&new_profile.avatar_url),
                p::updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, profile_id: uuid::Uuid) -> Result<Option<Profile>, diesel::result::Error> {
        use crate::schema::profiles::dsl::*;
        profiles.filter(id.eq(profile_id)).first::<Profile>(conn).optional()
    }

    pub fn list_by_workplace(
        conn: &mut PgConnection,
        workplace: uuid::Uuid,
    ) -> Result<Vec<Profile>, diesel::result::Error> {
        use crate::schema::profiles::dsl::*;
        profiles
            .filter(workplace_id.eq(Some(workplace)))
            .order(created_at.desc())
            .load::<Profile>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        profile_id: uuid::Uuid,
        changes: &UpdateProfile,
    ) -> Result<Profile, diesel::result::Error> {
        use crate::schema::profiles::dsl as p;
        diesel::update(p::profiles.filter(p::id.eq(profile_id)))
            .set((changes, p::updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    pub fn assign_workplace(
        conn: &mut PgConnection,
        profile_id: uuid::Uuid,
        workplace: uuid::Uuid,
        new_role: EmployeeRole,
    ) -> Result<Profile, diesel::result::Error> {
        use crate::schema::profiles::dsl as p;
        diesel::update(p::profiles.filter(p::id.eq(profile_id)))
            .set((
                p::workplace_id.eq(Some(workplace)),
                p::role.eq(new_role),
                p::updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }
}
