use chrono::NaiveDate;
use uuid::Uuid;

use snapwise_backend::db::models::project::CreateProjectRequest;
use snapwise_backend::validation::project::{validate_budget, validate_project_dates};
use snapwise_backend::validation::rules::validate_project_code;

fn request(start: Option<NaiveDate>, end: Option<NaiveDate>) -> CreateProjectRequest {
    CreateProjectRequest {
        workplace_id: Uuid::new_v4(),
        name: "Renovation".to_string(),
        location: "Main St 5".to_string(),
        project_code: "REN-2026".to_string(),
        start_date: start,
        end_date: end,
        supervisor: None,
        work_type: None,
        notes: None,
        plan_image_url: None,
        allow_gps: false,
        client_name: None,
        budget: None,
        team_members: vec![],
    }
}

#[test]
fn project_dates_must_be_ordered_when_both_present() {
    let jan = NaiveDate::from_ymd_opt(2026, 1, 10);
    let feb = NaiveDate::from_ymd_opt(2026, 2, 10);

    assert!(validate_project_dates(&request(jan, feb)).is_ok());
    assert!(validate_project_dates(&request(feb, jan)).is_err());
    assert!(validate_project_dates(&request(jan, jan)).is_ok());
    // either side missing skips the check
    assert!(validate_project_dates(&request(None, feb)).is_ok());
    assert!(validate_project_dates(&request(jan, None)).is_ok());
}

#[test]
fn budget_must_be_a_non_negative_finite_amount() {
    assert!(validate_budget(None).is_ok());
    assert!(validate_budget(Some(0.0)).is_ok());
    assert!(validate_budget(Some(125_000.50)).is_ok());
    assert!(validate_budget(Some(-1.0)).is_err());
    assert!(validate_budget(Some(f64::NAN)).is_err());
    assert!(validate_budget(Some(f64::INFINITY)).is_err());
}

#[test]
fn project_code_format_rules() {
    assert!(validate_project_code("REN-2026_A").is_ok());
    assert!(validate_project_code("").is_err());
    assert!(validate_project_code("bad code").is_err());
    assert!(validate_project_code(&"x".repeat(101)).is_err());
}
