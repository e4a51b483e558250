use crate::geo::LatLng;
use crate::incidents::{IncidentRegistry, IncidentStatus};
use crate::teams::{TeamMovementSimulator, TeamStatus};
use crate::test_harness::TestDashboard;
use crate::views::DashboardView;

// ====================================================================
// Dispatch requests
// ====================================================================

fn route_to_inc_003() -> Vec<LatLng> {
    vec![
        LatLng::new(10.7750, 106.7030),
        LatLng::new(10.7725, 106.7065),
        LatLng::new(10.7700, 106.7100),
    ]
}

/// Dashboard with TEAM-002 back on standby and INC-003 reopened.
fn dashboard_with_free_team() -> TestDashboard {
    let mut dashboard = TestDashboard::new();
    let world = dashboard.world_mut();
    world
        .resource_mut::<TeamMovementSimulator>()
        .stand_down("TEAM-002")
        .unwrap();
    world
        .resource_mut::<IncidentRegistry>()
        .update_incident_status("INC-003", IncidentStatus::Pending)
        .unwrap();
    dashboard
}

#[test]
fn test_dispatch_sends_team_toward_incident() {
    let mut dashboard = dashboard_with_free_team();
    dashboard
        .dispatch("TEAM-002", "INC-003", route_to_inc_003())
        .tick(1);

    let team = dashboard.teams().team("TEAM-002").unwrap();
    assert_eq!(team.status, TeamStatus::EnRoute);
    assert_eq!(team.route.len(), 3);
    let destination = team.destination.as_ref().unwrap();
    assert_eq!(destination.incident_id, "INC-003");
    assert_eq!(destination.location, LatLng::new(10.7700, 106.7100));
}

#[test]
fn test_dispatch_marks_pending_incident_responding() {
    let mut dashboard = dashboard_with_free_team();
    dashboard
        .dispatch("TEAM-002", "INC-003", route_to_inc_003())
        .tick(1);
    let incident = dashboard.incidents().incident("INC-003").unwrap();
    assert_eq!(incident.status, IncidentStatus::Responding);
}

#[test]
fn test_dispatched_team_arrives_after_route_length_periods() {
    let mut dashboard = dashboard_with_free_team();
    dashboard
        .dispatch("TEAM-002", "INC-003", route_to_inc_003())
        .mount(DashboardView::IncidentBoard);

    dashboard.advance_secs(20.0);
    assert_eq!(
        dashboard.teams().team("TEAM-002").unwrap().status,
        TeamStatus::EnRoute
    );

    dashboard.advance_secs(10.0);
    let team = dashboard.teams().team("TEAM-002").unwrap();
    assert_eq!(team.status, TeamStatus::OnSite);
    assert_eq!(team.current_location, LatLng::new(10.7700, 106.7100));
}

#[test]
fn test_dispatch_to_unknown_incident_is_ignored() {
    let mut dashboard = dashboard_with_free_team();
    let before = dashboard.teams().team("TEAM-002").unwrap().clone();
    dashboard
        .dispatch("TEAM-002", "INC-404", route_to_inc_003())
        .tick(1);
    assert_eq!(dashboard.teams().team("TEAM-002").unwrap(), &before);
}

#[test]
fn test_dispatch_of_unknown_team_leaves_incident_alone() {
    let mut dashboard = dashboard_with_free_team();
    dashboard
        .dispatch("TEAM-404", "INC-003", route_to_inc_003())
        .tick(1);
    let incident = dashboard.incidents().incident("INC-003").unwrap();
    assert_eq!(incident.status, IncidentStatus::Pending);
}

#[test]
fn test_dispatch_with_empty_route_is_ignored() {
    let mut dashboard = dashboard_with_free_team();
    dashboard.dispatch("TEAM-002", "INC-003", Vec::new()).tick(1);
    assert_eq!(
        dashboard.teams().team("TEAM-002").unwrap().status,
        TeamStatus::Standby
    );
    assert_eq!(
        dashboard.incidents().incident("INC-003").unwrap().status,
        IncidentStatus::Pending
    );
}

#[test]
fn test_dispatch_does_not_reopen_resolved_incident() {
    let mut dashboard = TestDashboard::new();
    dashboard
        .world_mut()
        .resource_mut::<TeamMovementSimulator>()
        .stand_down("TEAM-002")
        .unwrap();
    dashboard
        .dispatch("TEAM-002", "INC-003", route_to_inc_003())
        .tick(1);

    assert_eq!(
        dashboard.teams().team("TEAM-002").unwrap().status,
        TeamStatus::EnRoute
    );
    assert_eq!(
        dashboard.incidents().incident("INC-003").unwrap().status,
        IncidentStatus::Resolved
    );
}

#[test]
fn test_dispatch_republishes_team_snapshot() {
    let mut dashboard = dashboard_with_free_team();
    dashboard.tick(1);
    dashboard
        .dispatch("TEAM-002", "INC-003", route_to_inc_003())
        .tick(1);

    let snapshot = dashboard.latest().teams.clone().unwrap();
    let team = snapshot.teams.iter().find(|t| t.id == "TEAM-002").unwrap();
    assert_eq!(team.status, TeamStatus::EnRoute);
    assert_eq!(snapshot.deployed, 3);
}
