use bcrypt::{hash, verify};
use diesel::Connection;
use diesel::PgConnection;
use uuid::Uuid;

use crate::{
    db::models::auth::{AuthUser, LoginRequest, LoginResponse, NewUser, RegisterRequest, User},
    db::models::profile::{EmployeeRole, NewProfile, Profile},
    db::repositories::profiles::ProfilesRepo,
    db::repositories::users::UsersRepo,
    error::AppError,
    middleware::auth::AuthService as TokenService,
};

pub struct AuthService;

impl AuthService {
    /// Owner signup path: provisions the identity plus its profile
    /// projection. The profile starts without a workplace; creating one
    /// promotes the caller to owner.
    pub fn register(
        conn: &mut PgConnection,
        req: &RegisterRequest,
        bcrypt_cost: u32,
    ) -> Result<(User, Profile), AppError> {
        if UsersRepo::exists_by_email(conn, &req.email)? {
            return Err(AppError::conflict_with_code(
                "Email already exists",
                Some("email".to_string()),
                "USER_EMAIL_EXISTS",
            ));
        }

        let password_hash =
            hash(&req.password, bcrypt_cost).map_err(|_| AppError::internal("Failed to hash password"))?;

        let (user, profile) = conn.transaction::<(User, Profile), AppError, _>(|tx| {
            let user = UsersRepo::insert(
                tx,
                &NewUser {
                    email: req.email.clone(),
                    password_hash,
                },
            )?;

            let profile = ProfilesRepo::upsert(
                tx,
                &NewProfile {
                    id: user.id,
                    email: req.email.clone(),
                    full_name: req.full_name.clone(),
                    role: EmployeeRole::Member,
                    workplace_id: None,
                    avatar_url: None,
                },
            )?;

            Ok((user, profile))
        })?;

        Ok((user, profile))
    }

    pub fn login(
        conn: &mut PgConnection,
        tokens: &TokenService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let user = UsersRepo::find_by_email(conn, &req.email)?
            .ok_or_else(|| AppError::auth("Invalid email or password"))?;

        let is_valid = verify(&req.password, &user.password_hash)
            .map_err(|_| AppError::internal("Failed to verify password"))?;

        if !is_valid {
            return Err(AppError::auth("Invalid email or password"));
        }

        Self::issue_tokens(tokens, user.id, &user.email)
    }

    pub fn refresh(
        conn: &mut PgConnection,
        tokens: &TokenService,
        refresh_token: &str,
    ) -> Result<LoginResponse, AppError> {
        let claims = tokens
            .verify_refresh_token(refresh_token)
            .map_err(|_| AppError::auth("Invalid refresh token"))?;

        let user = UsersRepo::find_by_id(conn, claims.sub)?
            .ok_or_else(|| AppError::auth("Invalid refresh token"))?;

        Self::issue_tokens(tokens, user.id, &user.email)
    }

    pub fn issue_tokens(
        tokens: &TokenService,
        user_id: Uuid,
        email: &str,
    ) -> Result<LoginResponse, AppError> {
        let access_token = tokens.generate_access_token(user_id, email)?;
        let refresh_token = tokens.generate_refresh_token(user_id)?;

        Ok(LoginResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.access_expires_in(),
            user: AuthUser {
                id: user_id,
                email: email.to_string(),
            },
        })
    }
}
