use bcrypt::hash;
use diesel::Connection;
use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::auth::{NewUser, User},
    db::models::employee::{
        CompleteInviteRequest, Employee, EmployeeStatus, InviteEmployeeRequest, InvitePreview,
        NewEmployee,
    },
    db::models::profile::{EmployeeRole, NewProfile},
    db::repositories::employees::EmployeesRepo,
    db::repositories::profiles::ProfilesRepo,
    db::repositories::users::UsersRepo,
    error::AppError,
    services::access_service::AccessService,
    validation::employee::validate_invite_email,
};

pub struct EmployeesService;

impl EmployeesService {
    /// Creates a roster entry in invited state with a fresh single-use token.
    /// The invite email dispatch happens at the route layer after this
    /// commits, so a delivery failure cannot roll back the row.
    pub fn invite(
        conn: &mut PgConnection,
        invited_by: Uuid,
        req: &InviteEmployeeRequest,
    ) -> Result<Employee, AppError> {
        let inviter = AccessService::require_elevated(conn, invited_by)?;
        let workplace_id = AccessService::require_workplace(&inviter)?;

        validate_invite_email(&req.email)?;

        if EmployeesRepo::pending_invite_exists(conn, workplace_id, &req.email)? {
            return Err(AppError::conflict_with_code(
                "An invite is already pending for this email",
                Some("email".into()),
                "PENDING_INVITE",
            ));
        }

        let new_emp = NewEmployee {
            workplace_id,
            full_name: req.full_name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            role: req.role.unwrap_or(EmployeeRole::Member),
            status: EmployeeStatus::Invited,
            invite_token: Some(Uuid::new_v4()),
            invited_by: Some(invited_by),
            avatar_url: req.avatar_url.clone(),
        };

        let employee = EmployeesRepo::insert(conn, &new_emp)?;
        Ok(employee)
    }

    /// Roster listing is scoped to the caller's own workplace.
    pub fn list(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Employee>, AppError> {
        let profile = AccessService::load_profile(conn, user_id)?;
        let workplace_id = AccessService::require_workplace(&profile)?;

        let list = EmployeesRepo::list_by_workplace(conn, workplace_id)?;
        Ok(list)
    }

    /// Resolves a join link before any credential exists. Never-existed and
    /// already-consumed tokens get the same answer.
    pub fn verify_invite(conn: &mut PgConnection, token: Uuid) -> Result<InvitePreview, AppError> {
        let employee = EmployeesRepo::find_invited_by_token(conn, token)?
            .ok_or(AppError::InvalidOrExpiredInvite)?;

        Ok(InvitePreview {
            id: employee.id,
            full_name: employee.full_name,
            email: employee.email,
        })
    }

    /// Consumes the token and provisions the identity in one transaction.
    /// The token claim is a conditional update, so a second completion with
    /// the same token observes zero matched rows and fails without touching
    /// the identity tables.
    pub fn complete_invite(
        conn: &mut PgConnection,
        req: &CompleteInviteRequest,
        bcrypt_cost: u32,
    ) -> Result<(Employee, User), AppError> {
        let password_hash =
            hash(&req.password, bcrypt_cost).map_err(|_| AppError::internal("Failed to hash password"))?;

        let result = conn.transaction::<(Employee, User), AppError, _>(|tx| {
            let claimed = EmployeesRepo::claim_invite(tx, req.token)?
                .ok_or(AppError::InvalidOrExpiredInvite)?;

            if UsersRepo::exists_by_email(tx, &claimed.email)? {
                return Err(AppError::conflict_with_code(
                    "An account already exists for this email",
                    Some("email".into()),
                    "USER_EMAIL_EXISTS",
                ));
            }

            let user = UsersRepo::insert(
                tx,
                &NewUser {
                    email: claimed.email.clone(),
                    password_hash: password_hash.clone(),
                },
            )?;

            let employee = EmployeesRepo::link_user(tx, claimed.id, user.id)?;

            ProfilesRepo::upsert(
                tx,
                &NewProfile {
                    id: user.id,
                    email: employee.email.clone(),
                    full_name: employee.full_name.clone(),
                    role: employee.role,
                    workplace_id: Some(employee.workplace_id),
                    avatar_url: employee.avatar_url.clone(),
                },
            )?;

            Ok((employee, user))
        })?;

        Ok(result)
    }
}
