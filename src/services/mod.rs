pub mod access_service;
pub mod auth_service;
pub mod employees_service;
pub mod notifications;
pub mod profiles_service;
pub mod project_access_service;
pub mod projects_service;
pub mod spots_service;
pub mod tasks_service;
pub mod workplaces_service;
