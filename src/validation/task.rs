use crate::db::models::task::PhotoUpload;
use crate::error::AppError;

pub fn validate_photo_batch(photos: &[PhotoUpload]) -> Result<(), AppError> {
    if photos.is_empty() {
        return Err(AppError::validation("At least one photo is required"));
    }

    for photo in photos {
        if photo.file_name.trim().is_empty() {
            return Err(AppError::validation("Photo file name is required"));
        }
        if photo.employees_on_task < 0 {
            return Err(AppError::validation("employees_on_task cannot be negative"));
        }
        if photo.duration_mins < 0 {
            return Err(AppError::validation("duration_mins cannot be negative"));
        }
        if let (Some(started), Some(finished)) = (photo.started_at, photo.finished_at) {
            if finished < started {
                return Err(AppError::validation(
                    "Photo finished_at cannot precede started_at",
                ));
            }
        }
    }

    Ok(())
}
