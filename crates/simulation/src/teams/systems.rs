use bevy::prelude::*;
use serde::Serialize;

use super::roster::TeamMovementSimulator;
use super::types::{Destination, RescueTeam};
use crate::geo::LatLng;
use crate::incidents::{IncidentRegistry, IncidentStatus};
use crate::snapshots::LatestSnapshots;

/// Full roster state, published after every roster change.
#[derive(Event, Debug, Clone, PartialEq, Serialize)]
pub struct TeamSnapshot {
    /// Movement ticks run when the snapshot was taken.
    pub tick: u64,
    pub deployed: usize,
    pub teams: Vec<RescueTeam>,
}

impl TeamSnapshot {
    pub fn capture(sim: &TeamMovementSimulator) -> Self {
        Self {
            tick: sim.ticks(),
            deployed: sim.deployed_count(),
            teams: sim.teams().to_vec(),
        }
    }
}

/// Request to send a team to an incident along the given waypoints.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    pub team_id: String,
    pub incident_id: String,
    pub route: Vec<LatLng>,
}

/// Scheduler callback: one movement step for every en-route team.
pub fn tick_team_movement(mut sim: ResMut<TeamMovementSimulator>) {
    let moved = sim.tick();
    for movement in &moved {
        if movement.step.arrived {
            info!("{} arrived on site", movement.team_id);
        } else {
            debug!(
                "{} moved to ({:.4}, {:.4})",
                movement.team_id, movement.step.location.lat, movement.step.location.lng
            );
        }
    }
}

/// Applies dispatch requests: the team heads to the incident's location and
/// a pending incident becomes responding.
pub fn handle_dispatch_requests(
    mut requests: EventReader<DispatchRequest>,
    mut sim: ResMut<TeamMovementSimulator>,
    mut registry: ResMut<IncidentRegistry>,
) {
    for request in requests.read() {
        let Some(incident) = registry.incident(&request.incident_id) else {
            warn!(
                "Dispatch of {} ignored: unknown incident {}",
                request.team_id, request.incident_id
            );
            continue;
        };
        let destination = Destination {
            location: incident.location.coordinates(),
            incident_id: incident.id.clone(),
        };
        let pending = incident.status == IncidentStatus::Pending;

        if let Err(e) = sim.dispatch(&request.team_id, destination, request.route.iter().copied()) {
            warn!("Dispatch ignored: {}", e);
            continue;
        }
        info!("{} dispatched to {}", request.team_id, request.incident_id);

        if pending {
            if let Err(e) =
                registry.update_incident_status(&request.incident_id, IncidentStatus::Responding)
            {
                warn!("Dispatch status update failed: {}", e);
            }
        }
    }
}

/// Publishes the roster whenever it changed since this system last ran.
pub fn publish_team_snapshot(
    sim: Res<TeamMovementSimulator>,
    mut snapshots: EventWriter<TeamSnapshot>,
    mut latest: ResMut<LatestSnapshots>,
) {
    if !sim.is_changed() {
        return;
    }
    let snapshot = TeamSnapshot::capture(&sim);
    latest.teams = Some(snapshot.clone());
    snapshots.send(snapshot);
}
