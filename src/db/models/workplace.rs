use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::schema::workplaces;
use crate::validation::rules::validate_slug_format;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = workplaces)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Workplace {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = workplaces)]
pub struct NewWorkplace {
    pub name: String,
    pub slug: String,
    pub created_by: Uuid,
}

#[derive(Deserialize, Validate)]
pub struct CreateWorkplaceRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_slug_format"))]
    pub slug: String,
}
