// Sub-modules organized by functional domain
pub mod api;
pub mod auth;
pub mod employee;
pub mod profile;
pub mod project;
pub mod project_access;
pub mod spot;
pub mod task;
pub mod workplace;

// Re-export all models so call sites can use `crate::db::models::*`
pub use api::*;
pub use auth::*;
pub use employee::*;
pub use profile::*;
pub use project::*;
pub use project_access::*;
pub use spot::*;
pub use task::*;
pub use workplace::*;
