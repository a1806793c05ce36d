use crate::db::models::project::CreateProjectRequest;
use crate::error::AppError;

pub fn validate_project_dates(req: &CreateProjectRequest) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (req.start_date, req.end_date) {
        if end < start {
            return Err(AppError::validation("End date cannot be before start date"));
        }
    }
    Ok(())
}

pub fn validate_budget(budget: Option<f64>) -> Result<(), AppError> {
    if let Some(amount) = budget {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::validation("Budget must be a non-negative amount"));
        }
    }
    Ok(())
}
