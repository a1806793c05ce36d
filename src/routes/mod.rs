pub mod auth;
pub mod employees;
pub mod profiles;
pub mod project_access;
pub mod projects;
pub mod spots;
pub mod tasks;
pub mod workplaces;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

/// Routes that require an authenticated user. The auth middleware is layered
/// on in main, after merging with the public routes.
pub fn protected_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/profiles/me", get(profiles::get_me))
        .route("/profiles/me", put(profiles::update_me))
        .route("/profiles", get(profiles::list_profiles))
        .route("/roles", get(profiles::get_roles))
        .route("/workplaces", post(workplaces::create_workplace))
        .route("/workplaces", get(workplaces::list_workplaces))
        .route("/employees", post(employees::invite_employee))
        .route("/employees", get(employees::list_employees))
        .route("/projects", post(projects::create_project))
        .route("/projects", get(projects::list_projects))
        .route("/projects/:project_id/team", get(projects::get_project_team))
        .route("/projects/:project_id/tasks", get(tasks::list_project_tasks))
        .route("/projects/:project_id/spots", get(spots::list_project_spots))
        .route("/project-access", post(project_access::create_access))
        .route(
            "/project-access/employee/:employee_id",
            get(project_access::list_access_for_employee),
        )
        .route(
            "/project-access/:access_id",
            put(project_access::update_access),
        )
        .route(
            "/project-access/:access_id",
            delete(project_access::delete_access),
        )
        .route("/tasks", post(tasks::create_task))
        .route("/tasks/:task_id", get(tasks::get_task))
        .route("/spots", post(spots::create_spot))
        .with_state(state)
}

/// Routes reachable without a bearer token: signup, login, token refresh and
/// the invite join flow (the invite token is the credential there).
pub fn public_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/invites/:token/verify", get(employees::verify_invite))
        .route("/invites/complete", post(employees::complete_invite))
        .with_state(state)
}
