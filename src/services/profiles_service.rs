use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::profile::{Profile, UpdateProfile},
    db::repositories::profiles::ProfilesRepo,
    error::AppError,
    services::access_service::AccessService,
    utils::AssetUrlHelper,
};

pub struct ProfilesService;

impl ProfilesService {
    pub fn me(
        conn: &mut PgConnection,
        user_id: Uuid,
        assets: &AssetUrlHelper,
    ) -> Result<Profile, AppError> {
        let mut profile = AccessService::load_profile(conn, user_id)?;
        Self::process_avatar(&mut profile, assets);
        Ok(profile)
    }

    pub fn update_me(
        conn: &mut PgConnection,
        user_id: Uuid,
        changes: &UpdateProfile,
        assets: &AssetUrlHelper,
    ) -> Result<Profile, AppError> {
        // Existence check keeps the error distinct from a diesel NotFound.
        AccessService::load_profile(conn, user_id)?;

        let mut profile = ProfilesRepo::update_fields(conn, user_id, changes)?;
        Self::process_avatar(&mut profile, assets);
        Ok(profile)
    }

    /// Workplace roster as profiles, elevated roles only.
    pub fn list_workplace(
        conn: &mut PgConnection,
        caller_id: Uuid,
        assets: &AssetUrlHelper,
    ) -> Result<Vec<Profile>, AppError> {
        let caller = AccessService::require_elevated(conn, caller_id)?;
        let workplace_id = AccessService::require_workplace(&caller)?;

        let mut profiles = ProfilesRepo::list_by_workplace(conn, workplace_id)?;
        for profile in profiles.iter_mut() {
            Self::process_avatar(profile, assets);
        }
        Ok(profiles)
    }

    fn process_avatar(profile: &mut Profile, assets: &AssetUrlHelper) {
        if let Some(ref url) = profile.avatar_url {
            profile.avatar_url = Some(assets.process_url(url));
        }
    }
}
