use chrono::{Duration, Utc};
use uuid::Uuid;

use snapwise_backend::db::models::task::{PhotoPhase, PhotoStatus, PhotoUpload};
use snapwise_backend::validation::task::validate_photo_batch;

fn valid_photo() -> PhotoUpload {
    PhotoUpload {
        id: Uuid::new_v4().to_string(),
        file_name: "wall.jpg".to_string(),
        data_url: None,
        mime_type: Some("image/jpeg".to_string()),
        size: Some(2048),
        phase: PhotoPhase::Before,
        status: PhotoStatus::NotStarted,
        description: None,
        employees_on_task: 1,
        materials: vec!["plaster".to_string()],
        started_at: None,
        finished_at: None,
        duration_mins: 30,
        location_tag: Some("kitchen".to_string()),
        captured_at: Some(Utc::now()),
        capture_group_id: None,
        spot_id: None,
        pair_id: None,
    }
}

#[test]
fn photo_batch_must_not_be_empty() {
    assert!(validate_photo_batch(&[]).is_err());
    assert!(validate_photo_batch(&[valid_photo()]).is_ok());
}

#[test]
fn photo_batch_rejects_blank_file_names() {
    let mut photo = valid_photo();
    photo.file_name = "   ".to_string();
    assert!(validate_photo_batch(&[photo]).is_err());
}

#[test]
fn photo_batch_rejects_negative_counts() {
    let mut photo = valid_photo();
    photo.employees_on_task = -1;
    assert!(validate_photo_batch(&[photo]).is_err());

    let mut photo = valid_photo();
    photo.duration_mins = -5;
    assert!(validate_photo_batch(&[photo]).is_err());
}

#[test]
fn photo_batch_rejects_finished_before_started() {
    let now = Utc::now();

    let mut photo = valid_photo();
    photo.started_at = Some(now);
    photo.finished_at = Some(now - Duration::hours(1));
    assert!(validate_photo_batch(&[photo]).is_err());

    let mut photo = valid_photo();
    photo.started_at = Some(now - Duration::hours(1));
    photo.finished_at = Some(now);
    assert!(validate_photo_batch(&[photo]).is_ok());
}

#[test]
fn one_bad_photo_fails_the_whole_batch() {
    let mut bad = valid_photo();
    bad.file_name = String::new();
    assert!(validate_photo_batch(&[valid_photo(), bad]).is_err());
}
