pub mod employees;
pub mod profiles;
pub mod project_access;
pub mod projects;
pub mod spots;
pub mod tasks;
pub mod users;
pub mod workplaces;
