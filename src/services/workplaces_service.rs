use diesel::Connection;
use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::profile::EmployeeRole,
    db::models::workplace::{CreateWorkplaceRequest, NewWorkplace, Workplace},
    db::repositories::profiles::ProfilesRepo,
    db::repositories::workplaces::WorkplacesRepo,
    error::AppError,
    services::access_service::AccessService,
};

pub struct WorkplacesService;

impl WorkplacesService {
    /// Creates the tenant and promotes the creator's profile to owner of it
    /// in the same transaction.
    pub fn create(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &CreateWorkplaceRequest,
    ) -> Result<Workplace, AppError> {
        // A profile must exist before a workplace can be anchored to it.
        let profile = AccessService::load_profile(conn, user_id)?;

        if profile.workplace_id.is_some() {
            return Err(AppError::conflict_with_code(
                "User already belongs to a workplace",
                None,
                "ALREADY_IN_WORKPLACE",
            ));
        }

        if WorkplacesRepo::slug_exists(conn, &req.slug)? {
            return Err(AppError::conflict_with_code(
                "Workplace slug already taken",
                Some("slug".into()),
                "SLUG_EXISTS",
            ));
        }

        let workplace = conn.transaction::<Workplace, AppError, _>(|tx| {
            let workplace = WorkplacesRepo::insert(
                tx,
                &NewWorkplace {
                    name: req.name.clone(),
                    slug: req.slug.clone(),
                    created_by: user_id,
                },
            )?;

            ProfilesRepo::assign_workplace(tx, user_id, workplace.id, EmployeeRole::Owner)?;

            Ok(workplace)
        })?;

        Ok(workplace)
    }

    pub fn list_for_user(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Workplace>, AppError> {
        // Workplaces the user created, plus the one their profile belongs to.
        let mut list = WorkplacesRepo::list_by_creator(conn, user_id)?;

        if let Some(profile) = ProfilesRepo::find_by_id(conn, user_id)? {
            if let Some(wp_id) = profile.workplace_id {
                if !list.iter().any(|w| w.id == wp_id) {
                    if let Some(wp) = WorkplacesRepo::find_by_id(conn, wp_id)? {
                        list.push(wp);
                    }
                }
            }
        }

        Ok(list)
    }
}
