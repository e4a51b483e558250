//! Rescue team movement.
//!
//! Teams travel along routes of waypoints toward incidents. While the
//! incident board is mounted, every movement period each en-route team moves
//! to its next waypoint and goes on site when the route runs out.

pub mod roster;
pub mod seed;
pub mod systems;
pub mod types;

pub use roster::{DispatchError, TeamMovement, TeamMovementSimulator};
pub use seed::seed_teams;
pub use systems::{
    handle_dispatch_requests, publish_team_snapshot, tick_team_movement, DispatchRequest,
    TeamSnapshot,
};
pub use types::{Destination, RescueTeam, TeamStatus, TeamStep, TeamType};

use bevy::prelude::*;

use crate::sim_config::SimulationConfig;
use crate::views::{AppViewFeedExt, DashboardView};

pub struct TeamsPlugin;

impl Plugin for TeamsPlugin {
    fn build(&self, app: &mut App) {
        let interval = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default()
            .team_interval();

        app.init_resource::<TeamMovementSimulator>()
            .add_event::<TeamSnapshot>()
            .add_event::<DispatchRequest>()
            .register_view_feed(DashboardView::IncidentBoard, interval, tick_team_movement)
            .add_systems(
                FixedUpdate,
                handle_dispatch_requests
                    .after(crate::views::handle_view_lifecycle)
                    .in_set(crate::SimulationSet::PreSim),
            )
            .add_systems(
                FixedUpdate,
                publish_team_snapshot.in_set(crate::SimulationSet::PostSim),
            );
    }
}
