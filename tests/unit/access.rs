use chrono::Utc;
use uuid::Uuid;

use snapwise_backend::db::models::profile::EmployeeRole;
use snapwise_backend::db::models::project_access::ProjectAccess;
use snapwise_backend::services::access_service::{AccessDecision, Capabilities, TaskVisibility, decide};

fn access_row(can_view: bool, can_edit: bool, can_manage_tasks: bool, can_manage_team: bool) -> ProjectAccess {
    ProjectAccess {
        id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
        project_id: Uuid::new_v4(),
        can_view,
        can_edit,
        can_manage_tasks,
        can_manage_team,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn elevated_roles_bypass_access_rows() {
    let restrictive = access_row(false, false, false, false);

    for role in [EmployeeRole::Owner, EmployeeRole::Admin, EmployeeRole::Supervisor] {
        // a restrictive row must not filter an elevated role down
        assert_eq!(decide(role, Some(&restrictive)), AccessDecision::Elevated);
        assert_eq!(decide(role, None), AccessDecision::Elevated);

        let decision = decide(role, Some(&restrictive));
        assert!(decision.can_view());
        assert!(decision.can_edit());
        assert!(decision.can_manage_tasks());
        assert!(decision.can_manage_team());
        assert_eq!(decision.task_visibility(), TaskVisibility::All);
    }
}

#[test]
fn member_without_row_degrades_to_own_tasks_only() {
    let decision = decide(EmployeeRole::Member, None);

    assert_eq!(decision, AccessDecision::Scoped(Capabilities::none()));
    assert!(!decision.can_view());
    assert!(!decision.can_edit());
    assert!(!decision.can_manage_tasks());
    assert!(!decision.can_manage_team());
    assert_eq!(decision.task_visibility(), TaskVisibility::OwnOnly);
}

#[test]
fn viewer_takes_the_same_scoped_path_as_member() {
    let row = access_row(true, false, true, false);

    assert_eq!(
        decide(EmployeeRole::Viewer, Some(&row)),
        decide(EmployeeRole::Member, Some(&row))
    );
    assert_eq!(decide(EmployeeRole::Viewer, None), decide(EmployeeRole::Member, None));
}

#[test]
fn capabilities_map_field_by_field_without_inheritance() {
    // view without edit
    let decision = decide(EmployeeRole::Member, Some(&access_row(true, false, false, false)));
    assert!(decision.can_view());
    assert!(!decision.can_edit());
    assert_eq!(decision.task_visibility(), TaskVisibility::All);

    // manage tasks without view: the grant holds but visibility degrades
    let decision = decide(EmployeeRole::Member, Some(&access_row(false, false, true, false)));
    assert!(!decision.can_view());
    assert!(decision.can_manage_tasks());
    assert_eq!(decision.task_visibility(), TaskVisibility::OwnOnly);

    // edit without manage team
    let decision = decide(EmployeeRole::Member, Some(&access_row(true, true, false, false)));
    assert!(decision.can_edit());
    assert!(!decision.can_manage_team());
}

#[test]
fn revoked_view_row_behaves_like_no_row_for_visibility() {
    let no_row = decide(EmployeeRole::Member, None);
    let revoked = decide(EmployeeRole::Member, Some(&access_row(false, false, false, false)));

    assert_eq!(no_row.task_visibility(), revoked.task_visibility());
    assert_eq!(revoked.task_visibility(), TaskVisibility::OwnOnly);
}

#[test]
fn role_elevation_matrix() {
    assert!(EmployeeRole::Owner.is_elevated());
    assert!(EmployeeRole::Admin.is_elevated());
    assert!(EmployeeRole::Supervisor.is_elevated());
    assert!(!EmployeeRole::Member.is_elevated());
    assert!(!EmployeeRole::Viewer.is_elevated());
}
