use diesel::prelude::*;

use crate::db::models::employee::{Employee, EmployeeStatus, NewEmployee};

pub struct EmployeesRepo;

impl EmployeesRepo {
    pub fn insert(conn: &mut PgConnection, new_emp: &NewEmployee) -> Result<Employee, diesel::result::Error> {
        diesel::insert_into(crate::schema::employees::table)
            .values(new_emp)
            .get_result(conn)
    }

    pub fn list_by_workplace(conn: &mut PgConnection, wp: uuid::Uuid) -> Result<Vec<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        employees
            .filter(workplace_id.eq(wp))
            .order(created_at.desc())
            .load::<Employee>(conn)
    }

    pub fn find_invited_by_token(
        conn: &mut PgConnection,
        token: uuid::Uuid,
    ) -> Result<Option<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        employees
            .filter(invite_token.eq(Some(token)))
            .filter(status.eq(EmployeeStatus::Invited))
            .first::<Employee>(conn)
            .optional()
    }

    /// Single-use token claim. The WHERE clause doubles as a compare-and-swap:
    /// only one concurrent completion can match a non-null token in invited
    /// state, the loser sees zero updated rows.
    pub fn claim_invite(
        conn: &mut PgConnection,
        token: uuid::Uuid,
    ) -> Result<Option<Employee>, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        diesel::update(
            employees
                .filter(invite_token.eq(Some(token)))
                .filter(status.eq(EmployeeStatus::Invited)),
        )
        .set((
            status.eq(EmployeeStatus::Active),
            invite_token.eq(None::<uuid::Uuid>),
            updated_at.eq(chrono::Utc::now()),
        ))
        .get_result::<Employee>(conn)
        .optional()
    }

    pub fn link_user(
        conn: &mut PgConnection,
        employee_id: uuid::Uuid,
        linked_user: uuid::Uuid,
    ) -> Result<Employee, diesel::result::Error> {
        use crate::schema::employees::dsl::*;
        diesel::update(employees.filter(id.eq(employee_id)))
            .set((user_id.eq(Some(linked_user)), updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    pub fn pending_invite_exists(
        conn: &mut PgConnection,
        wp: uuid::Uuid,
        email_val: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::employees::dsl as e;
        diesel::select(diesel::dsl::exists(
            e::employees
                .filter(e::workplace_id.eq(wp))
                .filter(e::email.eq(email_val))
                .filter(e::status.eq(EmployeeStatus::Invited)),
        ))
        .get_result(conn)
    }
}
