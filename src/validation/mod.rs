pub mod employee;
pub mod project;
pub mod task;

use axum::{
    async_trait,
    extract::FromRequest,
    http::Request,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{
    db::models::api::ErrorDetail,
    error::AppError,
};

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload, so handlers always receive a fully-populated, validated value.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::Validation {
                message: "Invalid JSON format".to_string(),
            })?;

        value.validate().map_err(|errors| {
            let error_details: Vec<ErrorDetail> = errors
                .field_errors()
                .iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |error| ErrorDetail {
                        field: Some(field.to_string()),
                        code: error.code.to_string(),
                        message: error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field: {}", field)),
                    })
                })
                .collect();

            AppError::Validation {
                message: format!("Validation failed with {} errors", error_details.len()),
            }
        })?;

        Ok(ValidatedJson(value))
    }
}

pub mod rules {
    use validator::ValidationError;

    pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
        let mut score = 0;

        if password.len() >= 8 {
            score += 1;
        }
        if password.chars().any(|c| c.is_lowercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_numeric()) {
            score += 1;
        }
        if password.chars().any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)) {
            score += 1;
        }

        if score < 3 {
            return Err(ValidationError::new("weak_password"));
        }

        Ok(())
    }

    /// Workplace slug: lowercase letters, digits and hyphens, no leading or
    /// trailing hyphen.
    pub fn validate_slug_format(slug: &str) -> Result<(), ValidationError> {
        if slug.is_empty() {
            return Err(ValidationError::new("slug_required"));
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_numeric() || c == '-')
        {
            return Err(ValidationError::new("invalid_slug_format"));
        }
        if slug.starts_with('-') || slug.ends_with('-') {
            return Err(ValidationError::new("slug_invalid_hyphens"));
        }

        Ok(())
    }

    /// Human-readable project code: letters, numbers, hyphens, underscores.
    pub fn validate_project_code(code: &str) -> Result<(), ValidationError> {
        if code.is_empty() || code.len() > 100 {
            return Err(ValidationError::new("invalid_project_code_length"));
        }
        if !code
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::new("invalid_project_code_format"));
        }

        Ok(())
    }
}
