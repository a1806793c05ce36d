use diesel::prelude::*;

use crate::db::models::auth::{NewUser, User};

pub struct UsersRepo;

impl UsersRepo {
    pub fn insert(conn: &mut PgConnection, new_user: &NewUser) -> Result<User, diesel::result::Error> {
        diesel::insert_into(crate::schema::users::table)
            .values(new_user)
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, user_id: uuid::Uuid) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.filter(id.eq(user_id)).first::<User>(conn).optional()
    }

    pub fn find_by_email(conn: &mut PgConnection, email_val: &str) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.filter(email.eq(email_val)).first::<User>(conn).optional()
    }

    pub fn exists_by_email(conn: &mut PgConnection, email_val: &str) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl as u;
        diesel::select(diesel::dsl::exists(u::users.filter(u::email.eq(email_val))))
            .get_result(conn)
    }
}
